//! Compile Use Case
//!
//! Orchestrates one build run over the manifest.
//!
//! This module handles:
//! - Creating the preprocessed-output directory
//! - Driving the decision engine and compiler per entry
//! - Reporting progress through the event sink
//! - Collecting outcomes in manifest order

mod options;
mod result;
mod use_case;


pub use options::CompileOptions;
pub use result::CompileReport;
pub use use_case::CompileUseCase;
