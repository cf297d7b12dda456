use serde::Serialize;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// What a build would do with one manifest entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanRow {
    pub path: String,
    pub line: usize,
    pub exists: bool,
    pub known: bool,
    pub preprocess: bool,
}

pub fn render_plan(
    manifest: &str,
    strategy: &str,
    rows: &[PlanRow],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = CommandHeader::new(Icon::Plan, "questc plan")
        .field("Manifest", manifest)
        .field("Preprocess", strategy)
        .render(supports_color, supports_unicode);
    out.push('\n');

    for row in rows {
        let icon = if row.exists { Icon::Success } else { Icon::Error };
        out.push_str(&format!(
            "  {} {}",
            icon.colored(supports_color, supports_unicode),
            row.path
        ));
        if !row.exists {
            out.push_str(&format!(" {}", ColoredText::error("(missing)").render(supports_color)));
        } else if row.preprocess {
            out.push_str(&format!(" {}", ColoredText::info("(preprocess)").render(supports_color)));
        }
        out.push('\n');
    }
    out.push('\n');

    let missing = rows.iter().filter(|r| !r.exists).count();
    let mut summary = if missing == 0 {
        ResultSummary::success("Plan Ready")
    } else {
        ResultSummary::partial("Plan Has Missing Sources")
    };
    summary.add_stat("Entries", rows.len());
    summary.add_stat("Missing", missing);
    summary.add_stat("Preprocess candidates", rows.iter().filter(|r| r.preprocess).count());
    if missing > 0 {
        summary.add_warning(format!("{} entries would be reported as not found", missing));
    }
    summary.with_next_step("Run `questc build` to compile");
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}
