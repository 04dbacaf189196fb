//! Log sinks: the append-only destination for child output.
//!
//! The supervisor only ever calls [`LogSink::append`]; everything else about
//! a sink (buffering, rendering, marshaling onto a UI thread) belongs to the
//! adapter on the other side of the seam.
//!
//! ## Contents
//! - [`LogSink`] the trait the drain task calls
//! - [`ChannelSink`] mpsc-backed adapter; hand the receiver to your UI loop
//! - [`SinkFn`] closure-backed adapter for quick wiring
//! - [`LogWriter`] verbatim stdout writer (feature `logging`)

mod channel;
mod func;
mod sink;

#[cfg(feature = "logging")]
mod log;

pub use channel::ChannelSink;
pub use func::SinkFn;
pub use sink::LogSink;

#[cfg(feature = "logging")]
pub use log::LogWriter;
