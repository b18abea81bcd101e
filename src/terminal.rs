//! Terminal I/O - raw mode, bounded byte reads, and window size
//!
//! Uses rustix's safe termios API on stdin/stdout. Raw mode is held by a
//! [`Terminal`] value: dropping it clears the screen and restores the
//! attributes captured at startup, so every exit path (normal quit, `?`
//! propagation, panic unwinding) hands back a usable terminal.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};

use anyhow::{anyhow, bail, Context, Result};
use rustix::io::Errno;
use rustix::termios::{
    self, ControlModes, InputModes, LocalModes, OptionalActions, OutputModes, SpecialCodeIndex,
    Termios,
};

/// Read timeout in deciseconds (VTIME)
const READ_TIMEOUT_DECISECONDS: u8 = 1;

/// Longest cursor position report we will read
const CURSOR_REPORT_MAX: usize = 31;

pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
const CURSOR_TO_BOTTOM_RIGHT: &[u8] = b"\x1b[999C\x1b[999B";
const QUERY_CURSOR_POSITION: &[u8] = b"\x1b[6n";

/// A source of input bytes with a bounded wait
///
/// `Ok(None)` means nothing arrived within the timeout.
pub trait ByteSource {
    fn read_byte(&mut self) -> Result<Option<u8>>;
}

/// The controlling terminal in raw mode
#[derive(Debug)]
pub struct Terminal {
    original: Termios,
    /// Shared with the panic hook so the terminal is restored exactly once
    restored: Arc<AtomicBool>,
}

impl Terminal {
    /// Capture the current attributes and switch stdin to raw mode
    ///
    /// Disables echo, canonical input, signal keys, flow control, extended
    /// input processing, CR→NL translation and output post-processing. Reads
    /// return after at most one decisecond, with or without data.
    pub fn enable_raw_mode() -> Result<Self> {
        let stdin = io::stdin();
        let original = termios::tcgetattr(&stdin).context("tcgetattr failed")?;

        let mut raw = original.clone();
        raw.input_modes -= InputModes::BRKINT
            | InputModes::ICRNL
            | InputModes::INPCK
            | InputModes::ISTRIP
            | InputModes::IXON;
        raw.output_modes -= OutputModes::OPOST;
        raw.control_modes |= ControlModes::CS8;
        raw.local_modes -= LocalModes::ECHO | LocalModes::ICANON | LocalModes::IEXTEN | LocalModes::ISIG;
        raw.special_codes[SpecialCodeIndex::VMIN] = 0;
        raw.special_codes[SpecialCodeIndex::VTIME] = READ_TIMEOUT_DECISECONDS;

        termios::tcsetattr(&stdin, OptionalActions::Flush, &raw).context("tcsetattr failed")?;
        tracing::debug!("Raw mode enabled");

        Ok(Self {
            original,
            restored: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Restore the terminal before the panic message is printed
    ///
    /// Otherwise the message is written in raw mode and then wiped by the
    /// screen clear in `Drop`. Chains to the previously installed hook.
    pub fn install_panic_hook(&self) {
        static HOOK: Once = Once::new();
        let original = self.original.clone();
        let restored = Arc::clone(&self.restored);
        HOOK.call_once(move || {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_once(&restored, || {
                    clear_screen();
                    termios::tcsetattr(io::stdin(), OptionalActions::Flush, &original)
                        .context("tcsetattr failed in panic hook")
                });
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    /// Clear the screen and put back the original attributes
    ///
    /// Safe to call more than once; only the first call does anything.
    pub fn restore(&mut self) -> Result<()> {
        let original = &self.original;
        restore_once(&self.restored, || {
            clear_screen();
            termios::tcsetattr(io::stdin(), OptionalActions::Flush, original)
                .context("tcsetattr failed while restoring terminal")?;
            tracing::debug!("Terminal restored");
            Ok(())
        })
    }

    /// Write a whole frame in one go
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(frame).context("failed to write frame")?;
        stdout.flush().context("failed to flush frame")?;
        Ok(())
    }

    /// Terminal size as (rows, cols)
    ///
    /// Asks the OS first. If that fails or reports zero columns, moves the
    /// cursor to the bottom-right corner and asks the terminal where it is.
    pub fn window_size(&mut self) -> Result<(usize, usize)> {
        match termios::tcgetwinsize(io::stdout()) {
            Ok(ws) if ws.ws_col != 0 => return Ok((ws.ws_row as usize, ws.ws_col as usize)),
            Ok(_) => tracing::debug!("tcgetwinsize reported zero columns, querying cursor"),
            Err(e) => tracing::debug!("tcgetwinsize failed ({}), querying cursor", e),
        }

        self.write_frame(CURSOR_TO_BOTTOM_RIGHT)
            .context("failed to move cursor for size query")?;
        self.cursor_position()
    }

    /// Ask the terminal for the cursor position as (rows, cols)
    fn cursor_position(&mut self) -> Result<(usize, usize)> {
        self.write_frame(QUERY_CURSOR_POSITION)
            .context("failed to send cursor position query")?;
        read_cursor_report(self)
    }
}

/// Run `restore` unless the terminal was already restored
fn restore_once(restored: &AtomicBool, restore: impl FnOnce() -> Result<()>) -> Result<()> {
    if restored.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    restore()
}

fn clear_screen() {
    let mut stdout = io::stdout().lock();
    let _ = stdout.write_all(CLEAR_SCREEN);
    let _ = stdout.write_all(CURSOR_HOME);
    let _ = stdout.flush();
}

/// Read a cursor position report and parse it as (rows, cols)
///
/// Collects bytes until `R`, a read timeout, or `CURSOR_REPORT_MAX` bytes.
/// Bytes after the `R` are left unread.
pub fn read_cursor_report(src: &mut impl ByteSource) -> Result<(usize, usize)> {
    let mut report = Vec::with_capacity(CURSOR_REPORT_MAX);
    while report.len() < CURSOR_REPORT_MAX {
        match src.read_byte()? {
            Some(b'R') | None => break,
            Some(b) => report.push(b),
        }
    }

    parse_cursor_position_report(&report)
        .ok_or_else(|| anyhow!("unexpected cursor position report: {:?}", report))
}

impl ByteSource for Terminal {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match rustix::io::read(io::stdin(), &mut buf[..]) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(Errno::AGAIN) | Err(Errno::INTR) => Ok(None),
            Err(e) => bail!("read from terminal failed: {}", e),
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!("{:#}", e);
        }
    }
}

/// Parse `ESC [ rows ; cols` (the trailing `R` already stripped)
pub fn parse_cursor_position_report(report: &[u8]) -> Option<(usize, usize)> {
    let body = report.strip_prefix(b"\x1b[")?;
    let text = std::str::from_utf8(body).ok()?;
    let (rows, cols) = text.split_once(';')?;
    Some((rows.trim().parse().ok()?, cols.trim().parse().ok()?))
}

/// In-memory byte source that replays scripted input
///
/// Test helper for driving the key decoder and report parsing without a
/// terminal. Chunks are separated by a single timeout (`Ok(None)`), like bytes that
/// arrive in separate bursts. Once drained, every read times out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    reads: VecDeque<Option<u8>>,
}

impl ScriptedInput {
    /// All bytes arrive in one burst
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            reads: bytes.iter().copied().map(Some).collect(),
        }
    }

    /// Each chunk arrives after a timeout
    pub fn from_chunks<C: AsRef<[u8]>>(chunks: &[C]) -> Self {
        let mut reads = VecDeque::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                reads.push_back(None);
            }
            reads.extend(chunk.as_ref().iter().copied().map(Some));
        }
        Self { reads }
    }
}

impl ByteSource for ScriptedInput {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.reads.pop_front().flatten())
    }
}
