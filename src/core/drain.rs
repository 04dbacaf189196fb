//! # Drain loop: reads the child's stdout and forwards it to the sink.
//!
//! One drain task runs per `start()`. It is the only long-lived suspension
//! point in the crate: it blocks on "read next chunk", resuming whenever data
//! arrives or the stream closes.
//!
//! ```text
//! loop {
//!   read ≤ read_buf bytes
//!     ├─ n > 0      ─► sink.append(chunk)        (read order, no buffering)
//!     ├─ Ok(0)      ─► break                     (child closed the pipe)
//!     └─ Err(_)     ─► break                     (treated like end-of-stream)
//! }
//! lock slot ─► take child ─► wait() ─► append exit notice ─► slot = Idle
//! ```
//!
//! The lock is held from "take child" to the end, so `Idle` only becomes
//! visible to new `start()` calls after the exit notice reached the sink.
//! There is no cancellation token: `stop()` kills the child, the pipe closes,
//! and the loop ends on its own.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::io::AsyncReadExt;
use tokio::process::ChildStdout;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::SupervisorConfig;
use crate::core::supervisor::Slot;
use crate::sinks::LogSink;

/// Appends to the sink, isolating panics.
///
/// A broken sink must not kill the drain task: that would leak the child and
/// wedge the supervisor in `Running` forever.
pub(crate) async fn append_guarded(sink: &Arc<dyn LogSink>, text: &str) {
    let fut = sink.append(text);
    if AssertUnwindSafe(fut).catch_unwind().await.is_err() {
        warn!(sink = sink.name(), "sink panicked during append");
    }
}

/// Runs one drain loop to completion, then performs the terminal transition.
pub(crate) async fn run(
    mut stdout: ChildStdout,
    cfg: SupervisorConfig,
    sink: Arc<dyn LogSink>,
    slot: Arc<Mutex<Slot>>,
) {
    let mut buf = vec![0u8; cfg.read_buf.max(1)];
    // Bytes of a multibyte character split by the buffer boundary, carried
    // into the next read so decoding stays verbatim (at most 3 bytes).
    let mut pending: Vec<u8> = Vec::new();
    loop {
        match stdout.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                pending.extend_from_slice(&buf[..n]);
                let tail = incomplete_tail(&pending);
                let cut = pending.len() - tail;
                if cut > 0 {
                    let chunk = String::from_utf8_lossy(&pending[..cut]);
                    append_guarded(&sink, &chunk).await;
                    pending.drain(..cut);
                }
            }
            Err(e) => {
                // Abnormal stream failure ends the run like a clean EOF.
                debug!(error = %e, "stdout read failed");
                break;
            }
        }
    }
    if !pending.is_empty() {
        // Stream ended mid-character; nothing more is coming.
        let chunk = String::from_utf8_lossy(&pending);
        append_guarded(&sink, &chunk).await;
    }
    drop(stdout);

    let mut guard = slot.lock().await;
    let mut child = match std::mem::replace(&mut *guard, Slot::Idle) {
        Slot::Running(child) => child,
        Slot::Idle => {
            // Only the drain task flips Running → Idle, so the slot must
            // still hold the child this task was spawned with.
            warn!("drain loop found no child to reap");
            return;
        }
    };

    let notice = match child.wait().await {
        Ok(status) => match status.code() {
            Some(code) => format!("process exited with code {code}\n"),
            None => "process terminated by signal\n".to_string(),
        },
        Err(e) => format!("process exit status unavailable: {e}\n"),
    };
    if cfg.log_exit_code {
        append_guarded(&sink, &notice).await;
    }
    debug!("drain loop finished");
    // Guard drops here: Idle becomes visible only after the notice is in the sink.
}

/// Length of the incomplete UTF-8 sequence at the end of `bytes`, if any.
///
/// Invalid bytes elsewhere are not held back; lossy replacement is all that
/// is left for those.
fn incomplete_tail(bytes: &[u8]) -> usize {
    match std::str::from_utf8(bytes) {
        Ok(_) => 0,
        Err(e) if e.error_len().is_none() => bytes.len() - e.valid_up_to(),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_text_has_no_tail() {
        assert_eq!(incomplete_tail(b"hello"), 0);
        assert_eq!(incomplete_tail("abé".as_bytes()), 0);
        assert_eq!(incomplete_tail(b""), 0);
    }

    #[test]
    fn split_sequences_are_held_back() {
        // "é" = C3 A9, "€" = E2 82 AC
        assert_eq!(incomplete_tail(b"ab\xC3"), 1);
        assert_eq!(incomplete_tail(b"ab\xE2\x82"), 2);
        assert_eq!(incomplete_tail(b"ab\xF0\x9F\x98"), 3);
    }

    #[test]
    fn truly_invalid_bytes_are_not_held_back() {
        assert_eq!(incomplete_tail(b"ab\xFF"), 0);
        assert_eq!(incomplete_tail(b"ab\xC3\x28"), 0);
    }
}
