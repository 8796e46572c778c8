//! The palette board: palettes, their entries and the event routing between
//! them and the shell.

use serde::Serialize;
use thiserror::Error;

use crate::color::HexColor;
use crate::palette::{PaletteError, PaletteRegistry};
use crate::shell::{Capabilities, Notice, ShellEvent, Swatch};

/// Errors produced while dispatching shell events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("No palette at index {0}")]
    UnknownPalette(usize),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// What a dispatched event ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A swatch was added to the palette and rendered.
    SwatchAdded(Swatch),
    /// The entry was updated but holds no valid color.
    EntryUpdated,
    /// A new palette was created; carries the number of palettes added so far.
    PaletteAdded(usize),
    /// The user was shown a notice instead.
    Notified,
}

/// One named group: an entry field and the swatches it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub label: String,
    pub entry: String,
    pub swatches: Vec<Swatch>,
}

impl Palette {
    fn new(number: usize) -> Self {
        Self {
            label: format!("Palette {}", number),
            entry: String::new(),
            swatches: Vec::new(),
        }
    }

    /// Colors of the entry field: the last valid color and its inversion.
    pub fn entry_colors(&self) -> Option<Swatch> {
        self.swatches.last().copied()
    }
}

/// Serializable view of the board.
#[derive(Debug, Serialize)]
pub struct BoardSnapshot<'a> {
    pub max_palettes: usize,
    pub palettes: &'a [Palette],
}

/// Owns the palettes and reacts to shell events.
#[derive(Debug, Clone)]
pub struct PaletteBoard {
    registry: PaletteRegistry,
    palettes: Vec<Palette>,
}

impl Default for PaletteBoard {
    fn default() -> Self {
        Self::with_registry(PaletteRegistry::new())
    }
}

impl PaletteBoard {
    /// Create a board holding its first palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board around `registry` holding its first palette.
    ///
    /// The first palette is not counted; the registry only counts palettes
    /// added afterwards.
    pub fn with_registry(registry: PaletteRegistry) -> Self {
        Self {
            registry,
            palettes: vec![Palette::new(1)],
        }
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn registry(&self) -> &PaletteRegistry {
        &self.registry
    }

    pub fn palette(&self, index: usize) -> BoardResult<&Palette> {
        self.palettes
            .get(index)
            .ok_or(BoardError::UnknownPalette(index))
    }

    pub fn snapshot(&self) -> BoardSnapshot<'_> {
        BoardSnapshot {
            max_palettes: self.registry.max_palettes(),
            palettes: &self.palettes,
        }
    }

    /// Route one shell event.
    pub fn dispatch(
        &mut self,
        event: ShellEvent,
        caps: &mut Capabilities<'_>,
    ) -> BoardResult<Outcome> {
        match event {
            ShellEvent::TextChanged { palette, text } => self.text_changed(palette, text, caps),
            ShellEvent::Clicked { palette } => self.clicked(palette, caps),
            ShellEvent::AddPalette => Ok(self.add_palette(caps)),
        }
    }

    fn text_changed(
        &mut self,
        index: usize,
        text: String,
        caps: &mut Capabilities<'_>,
    ) -> BoardResult<Outcome> {
        let palette = self
            .palettes
            .get_mut(index)
            .ok_or(BoardError::UnknownPalette(index))?;

        let color = HexColor::validate(&text).ok();
        palette.entry = text;

        let Some(color) = color else {
            return Ok(Outcome::EntryUpdated);
        };

        log::info!("Content of entry changed {}", palette.entry);
        let swatch = Swatch::new(color);
        palette.swatches.push(swatch);
        caps.swatches.render_swatch(index, &swatch);
        Ok(Outcome::SwatchAdded(swatch))
    }

    fn clicked(&mut self, index: usize, caps: &mut Capabilities<'_>) -> BoardResult<Outcome> {
        if index >= self.palettes.len() {
            return Err(BoardError::UnknownPalette(index));
        }

        let Some(text) = caps.clipboard.read_text() else {
            caps.notifier.notify(&Notice::new("Empty!", "Clipboard is empty!"));
            return Ok(Outcome::Notified);
        };

        if HexColor::validate(&text).is_err() {
            caps.notifier.notify(&Notice::new(
                "Not RGB!",
                "Clipboard does not contain RGB hex code",
            ));
            return Ok(Outcome::Notified);
        }

        log::info!("Inserted color from clipboard");
        self.text_changed(index, text, caps)
    }

    fn add_palette(&mut self, caps: &mut Capabilities<'_>) -> Outcome {
        match self.registry.admit() {
            Ok(count) => {
                self.palettes.push(Palette::new(self.palettes.len() + 1));
                Outcome::PaletteAdded(count)
            }
            Err(err @ PaletteError::PaletteLimitReached { .. }) => {
                caps.notifier.notify(&Notice::new("No more!", err.to_string()));
                Outcome::Notified
            }
        }
    }
}
