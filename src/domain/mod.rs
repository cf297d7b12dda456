//! Domain Layer
//!
//! Pure pipeline logic without process or file-system dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Manifest entries, per-entry outcomes and the run summary
//! - `value_objects/` - Immutable value types (PreprocessDecision, PreprocessStrategy, excerpts)
//! - `services/` - Domain services (PreprocessDecisionEngine)
//! - `ports/` - Interface definitions for infrastructure
//!
//! All process spawning and disk access goes through the traits in `ports/`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
