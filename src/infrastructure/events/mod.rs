//! Event Sink Implementations
//!
//! Provides concrete implementations of BuildEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - the console sink lives with the binary's UI code

mod json;

pub use json::JsonEventSink;
