//! Runtime module - terminal integration
//!
//! - `app` - the render → wait for key or signal → dispatch loop and
//!   side-effect execution

pub mod app;

pub use app::{dispatch, next_event, run_cmd, App, Event, Flow};
