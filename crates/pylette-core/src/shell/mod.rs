//! Capabilities the UI shell provides to the board.
//!
//! The board never touches a window or the system clipboard directly. The
//! shell hands it these capabilities and forwards user input as
//! [`ShellEvent`]s.

mod memory;

pub use memory::{MemoryClipboard, RecordingNotifier, RecordingSink};

use serde::Serialize;

use crate::color::HexColor;

/// A color block together with the text color drawn on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub background: HexColor,
    pub foreground: HexColor,
}

impl Swatch {
    /// Swatch filled with `color`, labelled in its inverted color.
    pub fn new(color: HexColor) -> Self {
        Self {
            background: color,
            foreground: color.invert(),
        }
    }
}

/// A short message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Input delivered by the shell. Palette indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The entry of a palette now holds `text`.
    TextChanged { palette: usize, text: String },
    /// The entry of a palette was clicked.
    Clicked { palette: usize },
    /// The "Add Palette" control was activated.
    AddPalette,
}

/// Read access to the text clipboard.
pub trait ClipboardSource {
    /// Current clipboard text, or `None` if it is empty or unreadable.
    fn read_text(&mut self) -> Option<String>;
}

/// Draws swatches.
pub trait SwatchSink {
    /// Render `swatch` as the newest color of the given palette.
    fn render_swatch(&mut self, palette: usize, swatch: &Swatch);
}

/// Shows notices to the user.
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// The full set of capabilities borrowed for one dispatch.
pub struct Capabilities<'a> {
    pub clipboard: &'a mut dyn ClipboardSource,
    pub swatches: &'a mut dyn SwatchSink,
    pub notifier: &'a mut dyn Notifier,
}

impl<'a> Capabilities<'a> {
    pub fn new(
        clipboard: &'a mut dyn ClipboardSource,
        swatches: &'a mut dyn SwatchSink,
        notifier: &'a mut dyn Notifier,
    ) -> Self {
        Self {
            clipboard,
            swatches,
            notifier,
        }
    }
}
