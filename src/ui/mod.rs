//! Terminal UI for the questc binary
//!
//! - `theme` - design tokens (colors, icons, borders)
//! - `primitives` / `widgets` / `blocks` - rendering building blocks
//! - `views` - per-command rendering
//! - `json` - NDJSON helpers for `--json`

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
