//! Render sinks: destinations with settable text content.
//!
//! A controller writes each animation frame to a sink and clears it on
//! stop. Sinks must tolerate being written from the indicator's timer task.

use std::sync::Mutex;

use colored::Colorize;

/// Destination for rendered animation frames.
pub trait TextSink: Send + Sync {
    /// Replace the sink's text content. An empty string clears it.
    fn set_text(&self, text: &str);
}

/// In-memory sink for tests and embedding; stores the last written frame.
#[derive(Debug, Default)]
pub struct MemorySink {
    text: Mutex<String>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written text.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.lock().expect("sink lock poisoned").clone()
    }
}

impl TextSink for MemorySink {
    fn set_text(&self, text: &str) {
        *self.text.lock().expect("sink lock poisoned") = text.to_string();
    }
}

/// Terminal status line on stderr.
///
/// Each frame rewrites the current line in place (carriage return plus
/// erase-to-end), so the animation never scrolls. Output goes to stderr so
/// stdout remains clean for piping. Clearing erases the whole line,
/// label included.
pub struct StderrSink {
    label: String,
}

impl StderrSink {
    /// Create a sink with a label shown to the left of the animation.
    /// An empty label renders the frames alone.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl TextSink for StderrSink {
    fn set_text(&self, text: &str) {
        if text.is_empty() {
            eprint!("\r\u{1b}[2K");
        } else if self.label.is_empty() {
            eprint!("\r{text}\u{1b}[K");
        } else {
            eprint!("\r{} {text}\u{1b}[K", self.label.dimmed());
        }
    }
}
