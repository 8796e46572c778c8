//! Pylette Core Library
//!
//! Hex color validation, contrast inversion and palette admission, kept free
//! of any windowing or clipboard code.

pub mod board;
pub mod color;
pub mod palette;
pub mod shell;

pub use board::{BoardError, BoardSnapshot, Outcome, Palette, PaletteBoard};
pub use color::{ColorError, HexColor, invert, validate};
pub use palette::{DEFAULT_MAX_PALETTES, PaletteError, PaletteRegistry};
pub use shell::{Capabilities, ClipboardSource, Notice, Notifier, ShellEvent, Swatch, SwatchSink};
