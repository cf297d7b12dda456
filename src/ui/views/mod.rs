pub mod build;
pub mod classify;
pub mod plan;
