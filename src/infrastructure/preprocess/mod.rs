//! External preprocessor adapters

mod command;

pub use command::{CommandPreprocessor, DisabledPreprocessor};
