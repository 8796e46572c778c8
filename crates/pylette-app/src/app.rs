//! The interactive palette session.

use std::io::{self, BufRead, Write};

use pylette_core::{
    BoardError, Capabilities, ClipboardSource, DEFAULT_MAX_PALETTES, PaletteBoard,
    PaletteRegistry,
};
use thiserror::Error;

use crate::clipboard::SystemClipboard;
use crate::commands::{Command, CommandRegistry};
use crate::render::{NoticePrinter, SwatchPrinter, render_palette};

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub max_palettes: usize,
    /// Minimum width of a rendered swatch, in terminal columns.
    pub swatch_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Pylette".to_string(),
            max_palettes: DEFAULT_MAX_PALETTES,
            swatch_width: 9,
        }
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    board: PaletteBoard,
    clipboard: Box<dyn ClipboardSource>,
    swatches: SwatchPrinter,
    notices: NoticePrinter,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard::new()))
    }

    /// Create an application reading from a given clipboard.
    pub fn with_clipboard(config: AppConfig, clipboard: Box<dyn ClipboardSource>) -> Self {
        let board = PaletteBoard::with_registry(PaletteRegistry::with_max(config.max_palettes));
        let swatches = SwatchPrinter::new(config.swatch_width);
        Self {
            config,
            board,
            clipboard,
            swatches,
            notices: NoticePrinter::new(),
        }
    }

    pub fn board(&self) -> &PaletteBoard {
        &self.board
    }

    /// Read commands from `input` until it ends or `quit` is entered.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), AppError> {
        writeln!(output, "{} (type `help` for commands)", self.config.title)?;

        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            if !self.execute(command, &mut output)? {
                break;
            }
            output.flush()?;
        }

        log::info!("Session ended with {} palette(s)", self.board.palettes().len());
        Ok(())
    }

    /// Run one command. Returns `false` once the session should stop.
    fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<bool, AppError> {
        match command {
            Command::Event(event) => {
                let mut caps = Capabilities::new(
                    self.clipboard.as_mut(),
                    &mut self.swatches,
                    &mut self.notices,
                );
                match self.board.dispatch(event, &mut caps) {
                    Ok(outcome) => log::debug!("Dispatched: {:?}", outcome),
                    Err(e @ BoardError::UnknownPalette(_)) => writeln!(output, "{}", e)?,
                }
                for line in self.swatches.drain().into_iter().chain(self.notices.drain()) {
                    writeln!(output, "{}", line)?;
                }
            }
            Command::List => {
                for palette in self.board.palettes() {
                    writeln!(output, "{}", render_palette(palette, self.config.swatch_width))?;
                }
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.board.snapshot())?;
                writeln!(output, "{}", json)?;
            }
            Command::Help => write!(output, "{}", CommandRegistry::help())?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pylette_core::shell::MemoryClipboard;

    fn run_session(clipboard: MemoryClipboard, script: &str) -> (App, String) {
        let mut app = App::with_clipboard(AppConfig::default(), Box::new(clipboard));
        let mut output = Vec::new();
        app.run(script.as_bytes(), &mut output).unwrap();
        (app, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_set_renders_swatch() {
        let (app, output) = run_session(MemoryClipboard::new(), "set 1 #1A2B3C\n");
        assert!(output.contains("Palette 1: "));
        assert!(output.contains("#1A2B3C"));
        assert_eq!(app.board().palettes()[0].swatches.len(), 1);
    }

    #[test]
    fn test_paste_from_empty_clipboard() {
        let (_, output) = run_session(MemoryClipboard::new(), "paste 1\n");
        assert!(output.contains("[Empty!] Clipboard is empty!"));
    }

    #[test]
    fn test_paste_valid_clipboard() {
        let (app, _) = run_session(MemoryClipboard::with_text("#00ff00"), "paste 1\n");
        assert_eq!(app.board().palettes()[0].entry, "#00ff00");
    }

    #[test]
    fn test_add_past_limit() {
        let (app, output) = run_session(MemoryClipboard::new(), &"add\n".repeat(5));
        assert_eq!(app.board().palettes().len(), 6);
        assert!(!output.contains("[No more!]"));

        let (app, output) = run_session(MemoryClipboard::new(), &"add\n".repeat(6));
        assert_eq!(app.board().palettes().len(), 6);
        assert_eq!(output.matches("[No more!]").count(), 1);
        assert!(output.contains("[No more!] Maximum number of palettes (5) has been reached"));
    }

    #[test]
    fn test_unknown_palette_and_command() {
        let (_, output) = run_session(MemoryClipboard::new(), "set 4 #000000\nfrobnicate\n");
        assert!(output.contains("No palette at index 3"));
        assert!(output.contains("Unknown command: frobnicate"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (app, _) = run_session(MemoryClipboard::new(), "quit\nadd\n");
        assert_eq!(app.board().palettes().len(), 1);
    }

    #[test]
    fn test_list_shows_colored_entries() {
        let script = "set 1 #FF0000\nadd\nset 2 #12\nlist\n";
        let (_, output) = run_session(MemoryClipboard::new(), script);
        let entry = "\x1b[48;2;255;0;0m\x1b[38;2;0;255;255m[#FF0000]\x1b[0m";
        assert!(output.contains(&format!("Palette 1 {}", entry)));
        assert!(output.contains("Palette 2 [#12]"));
    }

    #[test]
    fn test_json_snapshot() {
        let (_, output) = run_session(MemoryClipboard::new(), "set 1 #ffffff\njson\n");
        assert!(output.contains("\"max_palettes\": 5"));
        assert!(output.contains("\"foreground\": \"#000000\""));
    }

    #[test]
    fn test_custom_max_palettes() {
        let config = AppConfig {
            max_palettes: 2,
            ..AppConfig::default()
        };
        let mut app = App::with_clipboard(config, Box::new(MemoryClipboard::new()));
        let mut output = Vec::new();
        app.run("add\nadd\nadd\n".as_bytes(), &mut output).unwrap();
        assert_eq!(app.board().palettes().len(), 3);
        assert!(String::from_utf8(output).unwrap().contains("(2) has been reached"));
    }
}
