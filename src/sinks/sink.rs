//! # Core sink trait
//!
//! `LogSink` is the extension point for receiving the supervised child's
//! output. The drain task calls [`LogSink::append`] for every chunk it reads,
//! in read order, and once more for the end-of-run notice.
//!
//! ## Contract
//! - `append` is fire-and-forget from the supervisor's point of view: no
//!   return value is inspected.
//! - Implementations should be cheap or hand the text off quickly; a slow
//!   sink stalls the drain loop (it does not stall the child, whose pipe
//!   simply backs up).
//! - If the host environment requires appends on a particular thread (a UI
//!   toolkit, say), the marshaling is the sink's job.
//!   [`ChannelSink`](crate::ChannelSink) exists for exactly that.
//! - A panicking sink is isolated: the drain loop catches it and keeps
//!   draining, so a broken adapter cannot leak the child process.

use async_trait::async_trait;

/// Contract for append-only text destinations.
///
/// Called from the drain task, not from the caller's thread.
#[async_trait]
pub trait LogSink: Send + Sync + 'static {
    /// Appends one chunk of text.
    ///
    /// Chunks are verbatim slices of the child's output stream; they are not
    /// guaranteed to end on line boundaries.
    async fn append(&self, text: &str);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
