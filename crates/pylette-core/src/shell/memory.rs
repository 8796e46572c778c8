//! In-memory capabilities for testing and headless use.

use super::{ClipboardSource, Notice, Notifier, Swatch, SwatchSink};

/// Clipboard holding a fixed value until replaced.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard holding `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn clear(&mut self) {
        self.text = None;
    }
}

impl ClipboardSource for MemoryClipboard {
    fn read_text(&mut self) -> Option<String> {
        self.text.clone()
    }
}

/// Keeps every rendered swatch in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub rendered: Vec<(usize, Swatch)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SwatchSink for RecordingSink {
    fn render_swatch(&mut self, palette: usize, swatch: &Swatch) {
        self.rendered.push((palette, *swatch));
    }
}

/// Keeps every notice in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title of the most recent notice.
    pub fn last_title(&self) -> Option<&str> {
        self.notices.last().map(|n| n.title.as_str())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
