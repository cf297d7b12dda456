//! Manifest reader
//!
//! Reads the ordered list of quest files (`locale_list`).

mod reader;

pub use reader::{load_manifest, ManifestReader};
