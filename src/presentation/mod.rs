//! Presentation Layer
//!
//! `cli` declares the command line; `factory` wires config into the
//! process-backed compiler, preprocessor and source tree.
//!
//! ```ignore
//! use questc::presentation::factory;
//!
//! let use_case = factory::create_compile_use_case(&config);
//! let report = use_case.execute(&entries, &options, &sink, &interrupted);
//! ```

pub mod cli;
pub mod factory;

pub use factory::create_compile_use_case;
