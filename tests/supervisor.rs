//! Integration tests driving real child processes.
//!
//! Each test wires a [`ChannelSink`] to a supervisor and asserts on the exact
//! sequence of appends: output chunks in read order, then the exit notice,
//! with `Idle` never observable before the notice.

#![cfg(unix)]

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::timeout;

use procvisor::{ChannelSink, CommandSpec, ProcessSupervisor, RunState, SpawnError, SupervisorConfig};

const WAIT: Duration = Duration::from_secs(10);

fn supervisor(cmd: CommandSpec) -> (ProcessSupervisor, UnboundedReceiver<String>) {
    supervisor_with(SupervisorConfig::default(), cmd)
}

fn supervisor_with(
    cfg: SupervisorConfig,
    cmd: CommandSpec,
) -> (ProcessSupervisor, UnboundedReceiver<String>) {
    let (sink, rx) = ChannelSink::new();
    (ProcessSupervisor::new(cfg, cmd, Arc::new(sink)), rx)
}

/// Receives appends until the exit notice arrives; returns the concatenated
/// output chunks and the notice itself.
async fn drain_run(rx: &mut UnboundedReceiver<String>) -> (String, String) {
    let mut output = String::new();
    loop {
        let msg = timeout(WAIT, rx.recv())
            .await
            .expect("timed out waiting for sink append")
            .expect("sink channel closed before exit notice");
        if msg.starts_with("process ") {
            return (output, msg);
        }
        output.push_str(&msg);
    }
}

#[tokio::test]
async fn echo_streams_output_then_exit_notice() {
    let (sup, mut rx) = supervisor(CommandSpec::new("echo").arg("hello"));

    sup.start().await.expect("echo should spawn");
    let (output, notice) = drain_run(&mut rx).await;

    assert_eq!(output, "hello\n");
    assert_eq!(notice, "process exited with code 0\n");
    assert_eq!(sup.state().await, RunState::Idle);
}

#[tokio::test]
async fn chunks_arrive_in_read_order() {
    let cmd = CommandSpec::new("sh").args(["-c", "printf one; printf two; printf three"]);
    let (sup, mut rx) = supervisor(cmd);

    sup.start().await.expect("sh should spawn");
    let (output, notice) = drain_run(&mut rx).await;

    assert_eq!(output, "onetwothree");
    assert_eq!(notice, "process exited with code 0\n");
}

#[tokio::test]
async fn nonzero_exit_code_is_reported() {
    let (sup, mut rx) = supervisor(CommandSpec::new("sh").args(["-c", "exit 3"]));

    sup.start().await.expect("sh should spawn");
    let (_, notice) = drain_run(&mut rx).await;

    assert_eq!(notice, "process exited with code 3\n");
    assert_eq!(sup.state().await, RunState::Idle);
}

#[tokio::test]
async fn spawn_failure_stays_idle_and_reaches_sink() {
    let (sup, mut rx) = supervisor(CommandSpec::new("/nonexistent/binary"));

    let err = sup.start().await.expect_err("spawn must fail");
    assert!(matches!(err, SpawnError::Io { .. }));

    let line = timeout(WAIT, rx.recv()).await.unwrap().unwrap();
    assert!(line.starts_with("failed to start /nonexistent/binary:"), "got: {line}");
    assert_eq!(sup.state().await, RunState::Idle);
}

#[tokio::test]
async fn start_while_running_is_rejected() {
    let (sup, mut rx) = supervisor(CommandSpec::new("sleep").arg("5"));

    sup.start().await.expect("sleep should spawn");
    assert_eq!(sup.state().await, RunState::Running);

    let err = sup.start().await.expect_err("second start must be rejected");
    assert!(matches!(err, SpawnError::AlreadyRunning));
    // The existing handle is untouched.
    assert_eq!(sup.state().await, RunState::Running);

    sup.stop().await;
    let (_, notice) = drain_run(&mut rx).await;
    assert_eq!(notice, "process terminated by signal\n");
    assert_eq!(sup.state().await, RunState::Idle);
}

#[tokio::test]
async fn stop_terminates_long_running_child() {
    let (sup, mut rx) = supervisor(CommandSpec::new("sleep").arg("30"));

    sup.start().await.expect("sleep should spawn");
    sup.stop().await;

    let (_, notice) = drain_run(&mut rx).await;
    assert_eq!(notice, "process terminated by signal\n");
    assert_eq!(sup.state().await, RunState::Idle);
}

#[tokio::test]
async fn toggle_alternates_idle_and_running() {
    let (sup, mut rx) = supervisor(CommandSpec::new("sleep").arg("5"));
    assert_eq!(sup.state().await, RunState::Idle);

    sup.toggle().await;
    assert_eq!(sup.state().await, RunState::Running);

    sup.toggle().await;
    let _ = drain_run(&mut rx).await;
    assert_eq!(sup.state().await, RunState::Idle);

    sup.toggle().await;
    assert_eq!(sup.state().await, RunState::Running);

    sup.toggle().await;
    let _ = drain_run(&mut rx).await;
    assert_eq!(sup.state().await, RunState::Idle);
}

#[tokio::test]
async fn restart_after_exit_spawns_fresh_child() {
    let (sup, mut rx) = supervisor(CommandSpec::new("echo").arg("again"));

    for _ in 0..2 {
        sup.start().await.expect("echo should spawn");
        let (output, notice) = drain_run(&mut rx).await;
        assert_eq!(output, "again\n");
        assert_eq!(notice, "process exited with code 0\n");
        assert_eq!(sup.state().await, RunState::Idle);
    }
}

#[tokio::test]
async fn exit_notice_can_be_disabled() {
    let cfg = SupervisorConfig {
        log_exit_code: false,
        ..SupervisorConfig::default()
    };
    let (sup, mut rx) = supervisor_with(cfg, CommandSpec::new("echo").arg("quiet"));

    sup.start().await.expect("echo should spawn");

    // Without a notice, settle on the observed state instead.
    timeout(WAIT, async {
        while sup.state().await != RunState::Idle {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("supervisor should return to idle");

    assert_eq!(rx.recv().await.as_deref(), Some("quiet\n"));
    assert!(rx.try_recv().is_err(), "no exit notice may be appended");
}

#[tokio::test]
async fn multibyte_output_survives_buffer_splits() {
    // read_buf = 3 forces "é" (2 bytes) and "€" (3 bytes) across read
    // boundaries; the chunks must still concatenate verbatim.
    let cfg = SupervisorConfig {
        read_buf: 3,
        ..SupervisorConfig::default()
    };
    let cmd = CommandSpec::new("sh").args(["-c", "printf 'abé€x'"]);
    let (sup, mut rx) = supervisor_with(cfg, cmd);

    sup.start().await.expect("sh should spawn");
    let (output, notice) = drain_run(&mut rx).await;

    assert_eq!(output, "abé€x");
    assert_eq!(notice, "process exited with code 0\n");
}

#[tokio::test]
async fn small_read_buffer_preserves_order() {
    let cfg = SupervisorConfig {
        read_buf: 4,
        ..SupervisorConfig::default()
    };
    let cmd = CommandSpec::new("sh").args(["-c", "printf abcdefghij"]);
    let (sup, mut rx) = supervisor_with(cfg, cmd);

    sup.start().await.expect("sh should spawn");
    let (output, notice) = drain_run(&mut rx).await;

    assert_eq!(output, "abcdefghij");
    assert_eq!(notice, "process exited with code 0\n");
}
