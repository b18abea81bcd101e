//! Status bar model - the inverted summary line and the timed message line

use std::time::{Duration, Instant};

use super::document::Document;
use super::editor::Cursor;

/// Maximum number of filename characters shown in the status bar
pub const FILENAME_DISPLAY_LEN: usize = 20;

/// A status message with the time it was set
///
/// The message is only displayed while younger than the configured timeout.
/// Expiry hides it; the text stays stored until replaced.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// When this message was set
    pub set_at: Instant,
}

impl StatusMessage {
    /// Create a new message stamped with the current time
    pub fn new(text: impl Into<String>) -> Self {
        Self::at(text, Instant::now())
    }

    /// Create a message with an explicit timestamp
    pub fn at(text: impl Into<String>, set_at: Instant) -> Self {
        Self {
            text: text.into(),
            set_at,
        }
    }

    /// Check whether the message should still be shown at `now`
    pub fn is_visible(&self, now: Instant, timeout: Duration) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.set_at) < timeout
    }
}

/// Left segment: truncated filename, line count, modified indicator
pub fn left_segment(document: &Document) -> String {
    let name: String = document
        .display_name()
        .chars()
        .take(FILENAME_DISPLAY_LEN)
        .collect();
    let modified = if document.is_dirty() { "(modified)" } else { "" };
    format!("{} - {} lines {}", name, document.num_rows(), modified)
}

/// Right segment: `current/total` row position
pub fn right_segment(document: &Document, cursor: &Cursor) -> String {
    format!("{}/{}", cursor.cy + 1, document.num_rows())
}

/// Lay out the status bar text for a given width
///
/// The left segment is truncated to `width`. The right segment is placed
/// flush against the right edge only when it fits in the remaining space;
/// otherwise the line is padded with spaces.
pub fn layout(document: &Document, cursor: &Cursor, width: usize) -> String {
    let left = left_segment(document);
    let right = right_segment(document, cursor);

    let mut line: String = left.chars().take(width).collect();
    let mut len = line.chars().count();
    let rlen = right.chars().count();

    while len < width {
        if width - len == rlen {
            line.push_str(&right);
            break;
        }
        line.push(' ');
        len += 1;
    }
    line
}
