//! # ProcessSupervisor: one child process, one toggle, one drain loop.
//!
//! The [`ProcessSupervisor`] owns the child handle and the command it runs.
//! Its state machine has two states:
//!
//! ```text
//! Idle ──start()──► Running ──(drain task observes exit)──► Idle
//! ```
//!
//! `stop()` requests termination but never flips state: the OS, not the
//! caller, decides when the process actually stops, so state reflects
//! **observed** exit. The kill closes the child's stdout pipe, the drain
//! loop's blocked read returns end-of-stream, and the drain task performs the
//! terminal transition after appending the exit notice.
//!
//! ## Single-writer discipline
//! The child handle lives in a slot guarded by one async mutex:
//! - `start()` does its check-and-set under the lock, so it cannot race the
//!   end of a previous drain task;
//! - only the drain task performs `Running → Idle`, and it holds the lock
//!   from "take the child" through "append the exit notice", so a concurrent
//!   `toggle()` can never observe `Idle` before the notice reached the sink.

use std::process::Stdio;
use std::sync::Arc;

use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::command::CommandSpec;
use crate::config::SupervisorConfig;
use crate::core::drain;
use crate::error::SpawnError;
use crate::sinks::LogSink;

/// Observable supervisor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No child process; `start()`/`toggle()` will spawn one.
    Idle,
    /// A child is running and its output is being drained.
    Running,
}

/// Tagged slot for the child handle.
///
/// The handle exists if and only if the supervisor is running; the enum makes
/// that a type-level guarantee instead of a nullable-handle convention.
pub(crate) enum Slot {
    Idle,
    Running(Child),
}

/// Supervises a single external child process.
///
/// Construct once with an immutable [`CommandSpec`]; every run launches the
/// same command line. Cheap to share: all methods take `&self`, and the slot
/// is internally reference-counted so the drain task can reach it.
pub struct ProcessSupervisor {
    cfg: SupervisorConfig,
    command: CommandSpec,
    sink: Arc<dyn LogSink>,
    slot: Arc<Mutex<Slot>>,
}

impl ProcessSupervisor {
    /// Creates an idle supervisor for the given command.
    pub fn new(cfg: SupervisorConfig, command: CommandSpec, sink: Arc<dyn LogSink>) -> Self {
        Self {
            cfg,
            command,
            sink,
            slot: Arc::new(Mutex::new(Slot::Idle)),
        }
    }

    /// Returns the currently observed state.
    pub async fn state(&self) -> RunState {
        match *self.slot.lock().await {
            Slot::Idle => RunState::Idle,
            Slot::Running(_) => RunState::Running,
        }
    }

    /// Starts the child process and its drain task.
    ///
    /// Fails with [`SpawnError::AlreadyRunning`] if a child is already
    /// supervised (the existing handle is untouched). An OS spawn failure is
    /// appended to the sink as a readable line **and** returned; the
    /// supervisor stays idle either way and the hosting process is never
    /// taken down.
    pub async fn start(&self) -> Result<(), SpawnError> {
        let mut guard = self.slot.lock().await;
        if matches!(*guard, Slot::Running(_)) {
            return Err(SpawnError::AlreadyRunning);
        }

        // stdin is reserved but never written to; stderr is not part of the
        // log contract. The child runs headless.
        let mut cmd = Command::new(self.command.program());
        cmd.args(self.command.get_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(source) => {
                let line = format!("failed to start {}: {source}\n", self.command.program());
                drain::append_guarded(&self.sink, &line).await;
                return Err(SpawnError::Io {
                    program: self.command.program().to_owned(),
                    source,
                });
            }
        };

        let Some(stdout) = child.stdout.take() else {
            // Should not happen with a piped stdout; reap rather than orphan.
            if let Err(e) = child.start_kill() {
                warn!(error = %e, "failed to kill child without captured stdout");
            }
            let line = "failed to start: child stdout was not captured\n";
            drain::append_guarded(&self.sink, line).await;
            return Err(SpawnError::StdoutUnavailable);
        };

        debug!(
            program = self.command.program(),
            pid = child.id(),
            "child process spawned"
        );
        *guard = Slot::Running(child);

        tokio::spawn(drain::run(
            stdout,
            self.cfg.clone(),
            Arc::clone(&self.sink),
            Arc::clone(&self.slot),
        ));
        Ok(())
    }

    /// Requests termination of the running child.
    ///
    /// No-op when idle. This is a **kill**, not a graceful terminate — a
    /// headless child offers no portable "ask nicely" primitive. The call
    /// does not block waiting for exit: the drain task observes the closed
    /// pipe, reaps the child, and flips state back to idle.
    pub async fn stop(&self) {
        let mut guard = self.slot.lock().await;
        if let Slot::Running(child) = &mut *guard {
            debug!(pid = child.id(), "requesting child termination");
            if let Err(e) = child.start_kill() {
                // The child may already have exited; the drain task will
                // still reap it and transition state.
                debug!(error = %e, "kill request failed");
            }
        }
    }

    /// Starts when idle, stops when running.
    ///
    /// The only operation a UI button handler needs. A start failure is not
    /// returned here; it already reached the sink as a readable line.
    pub async fn toggle(&self) {
        match self.state().await {
            RunState::Idle => {
                if let Err(e) = self.start().await {
                    debug!(error = e.as_label(), "toggle start rejected");
                }
            }
            RunState::Running => self.stop().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::ChannelSink;

    fn supervisor(cmd: CommandSpec) -> (ProcessSupervisor, tokio::sync::mpsc::UnboundedReceiver<String>) {
        let (sink, rx) = ChannelSink::new();
        (
            ProcessSupervisor::new(SupervisorConfig::default(), cmd, Arc::new(sink)),
            rx,
        )
    }

    #[tokio::test]
    async fn starts_idle() {
        let (sup, _rx) = supervisor(CommandSpec::new("true"));
        assert_eq!(sup.state().await, RunState::Idle);
    }

    #[tokio::test]
    async fn stop_while_idle_is_noop() {
        let (sup, mut rx) = supervisor(CommandSpec::new("true"));
        sup.stop().await;
        assert_eq!(sup.state().await, RunState::Idle);
        assert!(rx.try_recv().is_err(), "no log line may be emitted");
    }
}
