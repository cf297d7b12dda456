//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compile_events;
pub mod compiler_runner;
pub mod preprocessor;
pub mod source_tree;

pub use compile_events::{CompileEvent, CompileEventSink, NoopEventSink};
pub use compiler_runner::{CompilerRunner, InvocationError, RunOutput};
pub use preprocessor::Preprocessor;
pub use source_tree::SourceTree;
