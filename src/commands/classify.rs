//! Classify command handler
//!
//! Reports whether quest files are in the known-preprocess set. Reads the
//! same `preprocess.known_files` list the build uses.

use std::path::{Path, PathBuf};

use anyhow::Result;

use questc::domain::services::PreprocessDecisionEngine;
use questc::presentation::factory::create_decision_engine;

use super::{open_session, GlobalArgs};
use crate::ui::json::emit_event;
use crate::ui::json::events;
use crate::ui::views::classify::{render_classification, Classification};

/// Execute the classify command
pub fn cmd_classify(global: &GlobalArgs, files: &[PathBuf]) -> Result<i32> {
    let session = open_session(global)?;
    let engine = create_decision_engine(&session.config);
    let items: Vec<Classification> = files.iter().map(|f| classify(f, &engine)).collect();

    if session.ui.json {
        emit_event(&events::start("classify"))?;
        for item in &items {
            emit_event(&events::data("classify", item))?;
        }
        emit_event(&events::complete("classify"))?;
        return Ok(0);
    }

    print!(
        "{}",
        render_classification(&items, session.ui.color, session.ui.unicode)
    );
    Ok(0)
}

/// Membership is decided on the file name alone; directories are ignored.
fn classify(path: &Path, engine: &PreprocessDecisionEngine) -> Classification {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Classification {
        path: path.display().to_string(),
        known: engine.is_known(&file_name),
        file_name,
    }
}
