//! Domain Services
//!
//! Pipeline rules that operate on domain entities through ports.

mod decision_engine;

pub use decision_engine::PreprocessDecisionEngine;
