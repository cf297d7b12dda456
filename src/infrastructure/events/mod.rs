//! Machine-readable compile event sink
//!
//! The console sink lives with the rest of the terminal UI.

mod json;

pub use json::JsonEventSink;
