// src/output.rs

//! Operator-facing output sink.
//!
//! Relayed node output and notices go through an injected [`OutputSink`]
//! instead of a global logger. Each supervisor invocation holds its own
//! sink reference, so two concurrently supervised processes never share
//! mutable logging state, and tests can capture output in isolation.

/// Destination for line-structured operator output.
pub trait OutputSink: Send + Sync {
    /// Deliver one line, without a trailing newline.
    fn line(&self, line: &str);
}

/// Production sink: one line per `println!`.
///
/// Diagnostics from `tracing` are written to stderr (see
/// [`crate::logging`]), so stdout carries only node output and notices.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn line(&self, line: &str) {
        println!("{line}");
    }
}
