//! Plan command handler
//!
//! Shows what a build would do with each manifest entry without invoking
//! the compiler or the preprocessor.

use anyhow::Result;

use questc::domain::entities::QuestEntry;
use questc::domain::ports::SourceTree;
use questc::domain::services::PreprocessDecisionEngine;
use questc::infrastructure::{load_manifest, LocalSourceTree};
use questc::presentation::factory::create_decision_engine;

use super::{open_session, override_manifest, GlobalArgs};
use crate::ui::json::emit_event;
use crate::ui::json::events;
use crate::ui::views::plan::{render_plan, PlanRow};

/// Execute the plan command
pub fn cmd_plan(global: &GlobalArgs, manifest: Option<&std::path::Path>) -> Result<i32> {
    let session = open_session(global)?;
    let ui = session.ui;
    let mut config = session.config;
    override_manifest(&mut config, manifest)?;

    let manifest_path = config.manifest_path();
    let entries = load_manifest(&manifest_path)?;

    let tree = LocalSourceTree::new(&config.paths.quest_root);
    let engine = create_decision_engine(&config);
    let rows = plan_rows(&entries, &engine, &tree);

    if ui.json {
        emit_event(&events::start("plan"))?;
        for row in &rows {
            emit_event(&events::data("plan", row))?;
        }
        emit_event(&events::complete("plan"))?;
        return Ok(0);
    }

    print!(
        "{}",
        render_plan(
            &manifest_path.display().to_string(),
            config.preprocess.strategy.as_str(),
            &rows,
            ui.color,
            ui.unicode,
        )
    );
    Ok(0)
}

fn plan_rows<T: SourceTree>(
    entries: &[QuestEntry],
    engine: &PreprocessDecisionEngine,
    tree: &T,
) -> Vec<PlanRow> {
    entries
        .iter()
        .map(|entry| {
            let exists = tree.is_file(entry.relative_path());
            PlanRow {
                path: entry.to_string(),
                line: entry.line(),
                exists,
                known: engine.is_known(entry.file_name()),
                preprocess: exists && engine.is_candidate(entry),
            }
        })
        .collect()
}
