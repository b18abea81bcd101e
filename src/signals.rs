//! Process signals the editor reacts to
//!
//! Handlers only set flags. The main loop polls them between bounded reads,
//! so all work (resizing, restoring the terminal) happens on the main thread.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGHUP, SIGTERM, SIGWINCH};

/// Flags raised by signal handlers
#[derive(Debug, Clone, Default)]
pub struct SignalFlags {
    /// SIGTERM or SIGHUP arrived: leave the loop and restore the terminal
    pub(crate) terminate: Arc<AtomicBool>,
    /// SIGWINCH arrived since the last check
    pub(crate) resized: Arc<AtomicBool>,
}

impl SignalFlags {
    /// Register handlers for SIGWINCH, SIGTERM and SIGHUP
    ///
    /// Registering replaces the default terminate disposition of SIGTERM and
    /// SIGHUP, so the loop must poll [`SignalFlags::should_terminate`].
    pub fn register() -> io::Result<Self> {
        let flags = Self::default();
        signal_hook::flag::register(SIGWINCH, Arc::clone(&flags.resized))?;
        for signal in [SIGTERM, SIGHUP] {
            signal_hook::flag::register(signal, Arc::clone(&flags.terminate))?;
        }
        tracing::debug!("Signal handlers registered");
        Ok(flags)
    }

    pub fn should_terminate(&self) -> bool {
        self.terminate.load(Ordering::Relaxed)
    }

    /// Check for a pending resize and clear it
    pub fn take_resize(&self) -> bool {
        self.resized.swap(false, Ordering::Relaxed)
    }
}
