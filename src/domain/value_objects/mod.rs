//! Domain Value Objects
//!
//! Immutable value types that represent pipeline concepts.

mod excerpt;
mod preprocess;

pub use excerpt::{clip, first_line_excerpt, MAX_EXCERPT_LEN, TIMEOUT_EXCERPT, UNKNOWN_ERROR};
pub use preprocess::{PreprocessDecision, PreprocessResult, PreprocessStrategy};
