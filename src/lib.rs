//! crate-edit - a small screen-oriented terminal text editor
//!
//! This crate provides the core types and logic for the editor, following
//! the Elm Architecture pattern: key bytes are decoded into [`input::Key`]s,
//! mapped to [`Msg`]s, applied to the [`AppModel`] by [`update::update`], and
//! the resulting [`Cmd`] side effects are executed by the [`runtime`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod file_io;
pub mod input;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod signals;
pub mod terminal;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
