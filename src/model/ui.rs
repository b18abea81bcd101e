//! UI state - status message and quit confirmation

use super::status_bar::StatusMessage;

/// Default number of extra quit presses required with unsaved changes
pub const DEFAULT_QUIT_TIMES: u8 = 3;

/// Quit confirmation counter
///
/// With unsaved changes, quitting takes `times` consecutive quit presses.
/// Any other message resets the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitGuard {
    remaining: u8,
    times: u8,
}

impl QuitGuard {
    pub fn new(times: u8) -> Self {
        let times = times.max(1);
        Self {
            remaining: times,
            times,
        }
    }

    /// Presses still needed before the editor quits
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Register one quit press; returns true once the editor should quit
    pub fn press(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    /// Restore the full count
    pub fn reset(&mut self) {
        self.remaining = self.times;
    }
}

impl Default for QuitGuard {
    fn default() -> Self {
        Self::new(DEFAULT_QUIT_TIMES)
    }
}

/// UI state outside the document: message bar and quit confirmation
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Last status message (may be expired)
    pub status: Option<StatusMessage>,
    pub quit_guard: QuitGuard,
}

impl UiState {
    /// Create a new UI state with the given quit confirmation count
    pub fn new(quit_times: u8) -> Self {
        Self {
            status: None,
            quit_guard: QuitGuard::new(quit_times),
        }
    }

    /// Set the status message, stamped with the current time
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::new(message));
    }

    /// Text of the last status message, expired or not
    pub fn status_text(&self) -> &str {
        self.status.as_ref().map_or("", |m| m.text.as_str())
    }
}
