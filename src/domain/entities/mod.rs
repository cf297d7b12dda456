//! Domain Entities
//!
//! - `QuestEntry` - One manifest line naming a quest source file
//! - `CompileOutcome` - The result of carrying one entry through the pipeline
//! - `RunSummary` - Aggregated counts and the ordered failure list

mod outcome;
mod quest_entry;
mod summary;

pub use outcome::{CompileOutcome, CompileStatus};
pub use quest_entry::QuestEntry;
pub use summary::{FailedEntry, RunSummary};
