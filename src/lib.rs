//! # procvisor
//!
//! **Procvisor** supervises exactly one external child process: it launches the
//! program, exposes a start/stop toggle, and continuously drains the child's
//! standard output into a [`LogSink`].
//!
//! The crate is the non-UI half of a "one button, one log view" application:
//! a caller (typically a UI button handler) calls [`ProcessSupervisor::toggle`],
//! and a sink adapter (typically a UI text area) receives the output.
//!
//! ## Architecture
//! ```text
//!   caller (UI thread)                    drain task (spawned per run)
//!   ──────────────────                    ────────────────────────────
//!   toggle()                              loop {
//!     ├─ Idle    ─► start()                 read ≤ read_buf bytes from stdout
//!     │             ├─ spawn child          ├─ n > 0 ─► sink.append(chunk)
//!     │             ├─ slot = Running       └─ EOF / read error ─► break
//!     │             └─ spawn drain task   }
//!     └─ Running ─► stop()                lock slot:
//!                   └─ child.start_kill()   ├─ take child, wait() for status
//!                      (pipe closes,        ├─ sink.append("process exited …")
//!                       drain sees EOF)     └─ slot = Idle
//! ```
//!
//! ## Lifecycle
//! ```text
//! Idle ──start()──► Running ──(drain task observes exit)──► Idle
//!                      │
//!                      └─ stop() requests kill; it never flips state itself.
//!                         The transition is owned by the drain task, so Idle
//!                         only becomes visible after the exit notice reached
//!                         the sink.
//! ```
//!
//! - `stop()` is a **kill**, not a graceful terminate: a headless child has no
//!   portable "ask nicely" primitive, so the supervisor does not pretend to
//!   have one.
//! - Spawn failures are appended to the sink as a readable line and returned
//!   as [`SpawnError`]; they never crash the hosting process.
//! - Chunks reach the sink in exactly the order they were read; the exit
//!   notice is always the last append of a run.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use procvisor::{ChannelSink, CommandSpec, ProcessSupervisor, SupervisorConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let command = CommandSpec::new("ping").arg("google.com");
//!     let (sink, mut rx) = ChannelSink::new();
//!     let sup = ProcessSupervisor::new(SupervisorConfig::default(), command, Arc::new(sink));
//!
//!     sup.toggle().await; // start
//!     while let Some(chunk) = rx.recv().await {
//!         print!("{chunk}");
//!     }
//! }
//! ```

mod command;
mod config;
mod core;
mod error;
mod sinks;

// ---- Public re-exports ----

pub use command::CommandSpec;
pub use config::SupervisorConfig;
pub use core::{ProcessSupervisor, RunState};
pub use error::SpawnError;
pub use sinks::{ChannelSink, LogSink, SinkFn};

// Optional: expose a simple built-in stdout sink (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use sinks::LogWriter;
