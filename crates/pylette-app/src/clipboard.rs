//! System clipboard access.

use pylette_core::ClipboardSource;

/// Reads text from the system clipboard.
///
/// Any failure to open or read the clipboard reads as empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "native")]
impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.get_text() {
                Ok(text) => Some(text),
                Err(e) => {
                    log::warn!("Failed to read clipboard text: {}", e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to access clipboard: {}", e);
                None
            }
        }
    }
}

#[cfg(not(feature = "native"))]
impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        None
    }
}
