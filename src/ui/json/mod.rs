//! NDJSON output for the non-build commands
//!
//! Build progress is streamed by the library's `JsonEventSink`.

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let line =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
