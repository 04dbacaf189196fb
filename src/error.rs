//! Error types used by the procvisor runtime.
//!
//! This module defines [`SpawnError`], raised when a child process cannot be
//! started. Read failures inside the drain loop are intentionally **not**
//! errors: an abnormal stream failure is treated the same as a clean
//! end-of-stream, ending the run.
//!
//! [`SpawnError`] provides helper methods (`as_label`, `as_message`) for
//! logging/metrics.

use thiserror::Error;

/// # Errors produced when starting a child process.
///
/// These never terminate the hosting process; the supervisor stays idle and
/// the same information is forwarded to the log sink as a readable line.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SpawnError {
    /// A child is already being supervised; the existing handle is untouched.
    #[error("a child process is already running")]
    AlreadyRunning,

    /// The OS failed to create the child process (missing executable,
    /// permission denied, etc.).
    #[error("failed to start {program}: {source}")]
    Io {
        /// Program that could not be launched.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The child was created but its standard output was not captured.
    #[error("child stdout was not captured")]
    StdoutUnavailable,
}

impl SpawnError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use procvisor::SpawnError;
    ///
    /// assert_eq!(SpawnError::AlreadyRunning.as_label(), "spawn_already_running");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SpawnError::AlreadyRunning => "spawn_already_running",
            SpawnError::Io { .. } => "spawn_io",
            SpawnError::StdoutUnavailable => "spawn_stdout_unavailable",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SpawnError::AlreadyRunning => "already running".to_string(),
            SpawnError::Io { program, source } => {
                format!("failed to start {program}: {source}")
            }
            SpawnError::StdoutUnavailable => "child stdout was not captured".to_string(),
        }
    }
}
