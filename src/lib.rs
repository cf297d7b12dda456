//! questc - quest script build pipeline
//!
//! questc compiles the ordered list of quest files named in a manifest with
//! an external quest compiler, running an optional preprocessing pass for
//! files that use `define` statements, and reports every success and failure
//! in manifest order.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CompileOptions, CompileReport, CompileUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{CompileOutcome, CompileStatus, QuestEntry, RunSummary};
pub use domain::value_objects::PreprocessStrategy;
pub use error::{QuestError, QuestResult};
