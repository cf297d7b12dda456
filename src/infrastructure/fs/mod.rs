//! File system implementations

mod local;

pub use local::LocalSourceTree;
