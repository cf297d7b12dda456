//! External quest compiler

mod locator;
mod runner;

pub use locator::locate_compiler;
pub use runner::ProcessCompiler;
