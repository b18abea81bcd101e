//! The main loop: draw a frame, wait for a key or a signal, dispatch it

use std::time::Instant;

use anyhow::{Context, Result};

use crate::commands::Cmd;
use crate::file_io;
use crate::input::{self, Key};
use crate::keymap::msg_for_key;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::signals::SignalFlags;
use crate::terminal::{ByteSource, Terminal};
use crate::update::update;
use crate::view;

/// Whether the loop should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What woke the loop up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(Key),
    Resize,
    Terminate,
}

/// The running editor: the model plus the terminal it draws on
pub struct App {
    model: AppModel,
    terminal: Terminal,
    signals: SignalFlags,
}

impl App {
    pub fn new(model: AppModel, terminal: Terminal, signals: SignalFlags) -> Self {
        Self {
            model,
            terminal,
            signals,
        }
    }

    /// Run until the user quits, a termination signal arrives, or a fatal
    /// error occurs
    ///
    /// On error the terminal is restored when `self` is dropped.
    pub fn run(mut self) -> Result<()> {
        loop {
            self.model.scroll();
            let frame = view::render_frame(&self.model, Instant::now());
            self.terminal.write_frame(&frame)?;

            match next_event(&mut self.terminal, &self.signals)? {
                Event::Key(key) => {
                    if dispatch(&mut self.model, key) == Flow::Quit {
                        tracing::info!("Quit requested");
                        break;
                    }
                }
                Event::Resize => {
                    let (rows, cols) = self
                        .terminal
                        .window_size()
                        .context("failed to determine window size")?;
                    tracing::debug!("Resized to {}x{}", cols, rows);
                    update(&mut self.model, Msg::App(AppMsg::Resize(rows, cols)));
                }
                Event::Terminate => {
                    tracing::info!("Termination signal received");
                    break;
                }
            }
        }

        self.terminal.restore()
    }
}

/// Wait for the next key, checking signal flags after every bounded read
///
/// Termination wins over a pending resize, and both win over input.
pub fn next_event(src: &mut impl ByteSource, signals: &SignalFlags) -> Result<Event> {
    loop {
        if signals.should_terminate() {
            return Ok(Event::Terminate);
        }
        if signals.take_resize() {
            return Ok(Event::Resize);
        }
        if let Some(key) = input::try_read_key(src)? {
            return Ok(Event::Key(key));
        }
    }
}

/// Map a key to its message, update the model, and execute the resulting command
pub fn dispatch(model: &mut AppModel, key: Key) -> Flow {
    let msg = msg_for_key(key);
    match update(model, msg) {
        Some(cmd) => run_cmd(model, cmd),
        None => Flow::Continue,
    }
}

/// Execute a command's side effects, feeding results back through `update`
pub fn run_cmd(model: &mut AppModel, cmd: Cmd) -> Flow {
    match cmd {
        Cmd::None | Cmd::Redraw => Flow::Continue,
        Cmd::Quit => Flow::Quit,
        Cmd::SaveFile { path, content } => {
            let result = file_io::save(&path, &content).map_err(|e| e.to_string());
            match update(model, Msg::App(AppMsg::SaveCompleted(result))) {
                Some(next) => run_cmd(model, next),
                None => Flow::Continue,
            }
        }
    }
}
