//! Runtime core: child process lifecycle.
//!
//! The only public API from this module is [`ProcessSupervisor`] (plus the
//! observable [`RunState`]), which owns the child process handle and the
//! drain loop that forwards its output.
//!
//! Internal modules:
//! - [`supervisor`]: state machine, spawn/kill, the start/stop/toggle surface;
//! - [`drain`]: reads the child's stdout until end-of-stream, reaps the child,
//!   and performs the single `Running → Idle` transition.

mod drain;
mod supervisor;

pub use supervisor::{ProcessSupervisor, RunState};
