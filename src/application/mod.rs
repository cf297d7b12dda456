//! Application Layer
//!
//! `CompileUseCase` runs one build: it walks the manifest entries, asks the
//! domain which file to compile, drives the compiler port and folds the
//! outcomes into a report. Rules live in the domain; processes live in
//! infrastructure.

pub mod compile;

pub use compile::{CompileOptions, CompileReport, CompileUseCase};
