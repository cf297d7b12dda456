//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and file I/O.
//!
//! ## Structure
//!
//! - `manifest/` - Manifest (`locale_list`) reader
//! - `fs/` - Local source tree
//! - `compiler/` - External compiler runner and locator
//! - `preprocess/` - External preprocessor adapter
//! - `events/` - Event sinks (NDJSON)
//! - `process` - Subprocess execution with timeout and interrupt

pub mod compiler;
pub mod events;
pub mod fs;
pub mod manifest;
pub mod preprocess;
pub mod process;

// Re-export for convenience
pub use compiler::{locate_compiler, ProcessCompiler};
pub use events::JsonEventSink;
pub use fs::LocalSourceTree;
pub use manifest::{load_manifest, ManifestReader};
pub use preprocess::{CommandPreprocessor, DisabledPreprocessor};
