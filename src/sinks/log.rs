//! # Simple stdout sink for debugging and demos.
//!
//! [`LogWriter`] prints chunks verbatim to stdout, so running a supervisor
//! with it behaves like piping the child's output through the host process.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use procvisor::{CommandSpec, LogWriter, ProcessSupervisor, SupervisorConfig};
//!
//! let sup = ProcessSupervisor::new(
//!     SupervisorConfig::default(),
//!     CommandSpec::new("ping").arg("google.com"),
//!     Arc::new(LogWriter),
//! );
//! ```

use async_trait::async_trait;

use super::sink::LogSink;

/// Verbatim stdout sink.
///
/// Enabled via the `logging` feature. Not intended for production use —
/// implement a custom [`LogSink`] to render output elsewhere.
pub struct LogWriter;

#[async_trait]
impl LogSink for LogWriter {
    async fn append(&self, text: &str) {
        print!("{text}");
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
