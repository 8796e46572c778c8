//! Pylette Application
//!
//! Terminal shell around the palette board: system clipboard, ANSI swatch
//! rendering and a line-oriented command prompt.

mod app;
mod clipboard;
mod commands;
mod render;

pub use app::{App, AppConfig, AppError};
pub use clipboard::SystemClipboard;
pub use commands::{Command, CommandError, CommandInfo, CommandRegistry};
pub use render::{NoticePrinter, SwatchPrinter, paint_swatch, render_palette};
