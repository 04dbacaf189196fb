//! # Channel-backed sink (`ChannelSink`)
//!
//! [`ChannelSink`] forwards every appended chunk into an unbounded
//! `tokio::sync::mpsc` channel. The receiver half is returned at construction
//! so the hosting application can drain it wherever it likes — a UI event
//! loop, a test assertion, a file writer task.
//!
//! This is the intended way to marshal output onto a thread the supervisor
//! does not know about: the drain task sends from its own context, the owner
//! receives from theirs.
//!
//! ## Example
//! ```rust
//! use procvisor::{ChannelSink, LogSink};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (sink, mut rx) = ChannelSink::new();
//! sink.append("hello\n").await;
//! assert_eq!(rx.recv().await.as_deref(), Some("hello\n"));
//! # }
//! ```

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::sink::LogSink;

/// Sink that forwards appends into an unbounded mpsc channel.
///
/// Sends never block; if the receiver has been dropped, appends are silently
/// discarded (the run is presumably no longer observed).
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelSink {
    /// Creates the sink together with the receiver for its output.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl LogSink for ChannelSink {
    async fn append(&self, text: &str) {
        let _ = self.tx.send(text.to_owned());
    }

    fn name(&self) -> &'static str {
        "channel"
    }
}
