//! # Closure-backed sink (`SinkFn`)
//!
//! [`SinkFn`] wraps a plain `Fn(&str)` so small adapters do not need a named
//! type. The closure runs synchronously inside the drain task's `append`;
//! keep it cheap.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use procvisor::{LogSink, SinkFn};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let buf = Arc::new(Mutex::new(String::new()));
//! let b = buf.clone();
//! let sink = SinkFn::arc("memory", move |text: &str| {
//!     b.lock().unwrap().push_str(text);
//! });
//!
//! sink.append("hi").await;
//! assert_eq!(&*buf.lock().unwrap(), "hi");
//! # }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use super::sink::LogSink;

/// Function-backed sink implementation.
pub struct SinkFn<F> {
    name: &'static str,
    f: F,
}

impl<F> SinkFn<F>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    /// Creates a new closure-backed sink.
    ///
    /// Prefer [`SinkFn::arc`] when you immediately need an `Arc<dyn LogSink>`.
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }

    /// Creates the sink and returns it as a shared handle.
    pub fn arc(name: &'static str, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F> LogSink for SinkFn<F>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    async fn append(&self, text: &str) {
        (self.f)(text);
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
