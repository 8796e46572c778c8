//! ANSI truecolor rendering of swatches and notices.

use peniko::Color;
use pylette_core::{Notice, Notifier, Palette, Swatch, SwatchSink};

const RESET: &str = "\x1b[0m";

/// Collects swatch lines until the app flushes them to the terminal.
#[derive(Debug, Clone)]
pub struct SwatchPrinter {
    width: usize,
    lines: Vec<String>,
}

impl SwatchPrinter {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
        }
    }

    /// Take the pending lines.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl SwatchSink for SwatchPrinter {
    fn render_swatch(&mut self, palette: usize, swatch: &Swatch) {
        self.lines.push(format!(
            "Palette {}: {}",
            palette + 1,
            paint_swatch(swatch, self.width)
        ));
    }
}

/// Collects notices until the app flushes them.
#[derive(Debug, Default, Clone)]
pub struct NoticePrinter {
    lines: Vec<String>,
}

impl NoticePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Notifier for NoticePrinter {
    fn notify(&mut self, notice: &Notice) {
        log::debug!("Notice: {}", notice.title);
        self.lines.push(format!("[{}] {}", notice.title, notice.message));
    }
}

/// A swatch block labelled with its hex code, padded to at least `width`.
pub fn paint_swatch(swatch: &Swatch, width: usize) -> String {
    let label = swatch.background.to_string();
    format!(
        "{}{}{:^width$}{}",
        background_code(swatch.background.into()),
        foreground_code(swatch.foreground.into()),
        label,
        RESET,
        width = width.max(label.len()),
    )
}

/// One line per palette: label, entry text and every swatch.
///
/// Once the entry has held a valid color it is drawn on that color, in the
/// inverted foreground.
pub fn render_palette(palette: &Palette, width: usize) -> String {
    let entry = format!("[{}]", palette.entry);
    let mut line = match palette.entry_colors() {
        Some(colors) => format!(
            "{} {}{}{}{}",
            palette.label,
            background_code(colors.background.into()),
            foreground_code(colors.foreground.into()),
            entry,
            RESET,
        ),
        None => format!("{} {}", palette.label, entry),
    };
    for swatch in &palette.swatches {
        line.push(' ');
        line.push_str(&paint_swatch(swatch, width));
    }
    line
}

fn background_code(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("\x1b[48;2;{};{};{}m", rgba.r, rgba.g, rgba.b)
}

fn foreground_code(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("\x1b[38;2;{};{};{}m", rgba.r, rgba.g, rgba.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pylette_core::HexColor;

    #[test]
    fn test_paint_swatch_codes() {
        let swatch = Swatch::new(HexColor::validate("#FF0000").unwrap());
        let painted = paint_swatch(&swatch, 9);
        assert_eq!(
            painted,
            "\x1b[48;2;255;0;0m\x1b[38;2;0;255;255m #FF0000 \x1b[0m"
        );
    }

    #[test]
    fn test_paint_swatch_never_truncates() {
        let swatch = Swatch::new(HexColor::BLACK);
        assert!(paint_swatch(&swatch, 2).contains("#000000"));
    }

    #[test]
    fn test_render_palette_colors_entry() {
        let mut palette = Palette {
            label: "Palette 1".to_string(),
            entry: "#abc".to_string(),
            swatches: Vec::new(),
        };
        assert_eq!(render_palette(&palette, 7), "Palette 1 [#abc]");

        palette.entry = "#000000".to_string();
        palette.swatches.push(Swatch::new(HexColor::BLACK));
        assert_eq!(
            render_palette(&palette, 7),
            "Palette 1 \x1b[48;2;0;0;0m\x1b[38;2;255;255;255m[#000000]\x1b[0m \
             \x1b[48;2;0;0;0m\x1b[38;2;255;255;255m#000000\x1b[0m"
        );
    }

    #[test]
    fn test_swatch_printer_drains() {
        let mut printer = SwatchPrinter::new(7);
        printer.render_swatch(0, &Swatch::new(HexColor::WHITE));
        let lines = printer.drain();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Palette 1: "));
        assert!(printer.drain().is_empty());
    }

    #[test]
    fn test_notice_printer() {
        let mut printer = NoticePrinter::new();
        printer.notify(&Notice::new("Empty!", "Clipboard is empty!"));
        assert_eq!(printer.drain(), vec!["[Empty!] Clipboard is empty!".to_string()]);
    }
}
