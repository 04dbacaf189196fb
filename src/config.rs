//! # Supervisor configuration.
//!
//! [`SupervisorConfig`] defines how the drain loop reads the child's output
//! and what it reports when a run ends.
//!
//! # Example
//! ```
//! use procvisor::SupervisorConfig;
//!
//! let mut cfg = SupervisorConfig::default();
//! cfg.read_buf = 1024;
//!
//! assert!(cfg.log_exit_code);
//! ```

/// Configuration for a [`ProcessSupervisor`](crate::ProcessSupervisor).
///
/// Controls the drain loop's read granularity and the end-of-run notice.
#[derive(Clone, Debug)]
pub struct SupervisorConfig {
    /// Size in bytes of the fixed read buffer used by the drain loop.
    ///
    /// Each read forwards at most this many bytes to the sink in one chunk.
    /// Clamped to a minimum of 1.
    pub read_buf: usize,
    /// Whether the end-of-run notice is appended to the sink.
    ///
    /// When `false`, the run still ends with state returning to idle, but no
    /// final line is appended.
    pub log_exit_code: bool,
}

impl Default for SupervisorConfig {
    /// Provides a default configuration:
    /// - `read_buf = 256`
    /// - `log_exit_code = true`
    fn default() -> Self {
        Self {
            read_buf: 256,
            log_exit_code: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SupervisorConfig::default();
        assert_eq!(cfg.read_buf, 256);
        assert!(cfg.log_exit_code);
    }
}
