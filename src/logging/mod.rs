//! Structured logging: tracing subscriber setup and ndjson session summaries.

mod format;

pub use format::{SessionSummary, StructuredLogger};
