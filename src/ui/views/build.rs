use std::io::{self, Write};
use std::sync::Mutex;

use questc::config::Config;
use questc::domain::entities::CompileOutcome;
use questc::CompileReport;
use questc::domain::ports::{CompileEvent, CompileEventSink};
use questc::domain::value_objects::clip;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

pub fn render_build_header(
    config: &Config,
    compiler: &str,
    jobs: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    CommandHeader::new(Icon::Build, "questc build")
        .field("Quest root", config.paths.quest_root.display())
        .field("Manifest", config.manifest_path().display())
        .field("Compiler", compiler)
        .field("Preprocess", config.preprocess.strategy)
        .field_if(jobs > 1, "Jobs", jobs)
        .render(supports_color, supports_unicode)
}

/// One progress line per finished entry, plus the indented excerpt on failure
pub fn render_outcome_line(
    index: usize,
    total: usize,
    outcome: &CompileOutcome,
    excerpt_width: usize,
    supports_color: bool,
) -> String {
    let counter = format!("[{}/{}]", index, total);
    let mut out = if outcome.is_success() {
        format!(
            "{} {} Compiled: {}",
            ColoredText::success(theme::tags::OK).render(supports_color),
            counter,
            outcome.entry()
        )
    } else {
        format!(
            "{} {} Failed: {}",
            ColoredText::error(theme::tags::ERROR).render(supports_color),
            counter,
            outcome.entry()
        )
    };

    if outcome.preprocessed() {
        out.push(' ');
        out.push_str(&ColoredText::dim("(preprocessed)").render(supports_color));
    }
    out.push('\n');

    if let Some(excerpt) = outcome.excerpt() {
        out.push_str(&format!(
            "    {}\n",
            ColoredText::dim(clip(excerpt, excerpt_width)).render(supports_color)
        ));
    }
    out
}

/// Final summary box. Lists at most `max_failures` failed entries.
pub fn render_build_summary(
    report: &CompileReport,
    max_failures: usize,
    excerpt_width: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let summary = &report.summary;
    let mut block = if report.is_success() {
        ResultSummary::success("Build Complete")
    } else if report.interrupted {
        ResultSummary::stopped("Build Interrupted")
    } else {
        ResultSummary::partial("Build Failed")
    };

    block.add_stat("Total", report.total);
    block.add_stat("Compiled", summary.compiled_count);
    block.add_stat("Failed", summary.failed_count);
    if report.processed() < report.total {
        block.add_stat("Skipped", report.total - report.processed());
    }

    for failed in summary.failed_entries.iter().take(max_failures) {
        block.add_failure(
            failed.entry.to_string(),
            failed.excerpt.as_deref().map(|e| clip(e, excerpt_width)),
        );
    }
    block.set_hidden_failures(summary.failed_entries.len().saturating_sub(max_failures));

    block.render(supports_color, supports_unicode)
}

pub fn render_interrupted(
    processed: usize,
    total: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning("Compilation interrupted by user")
            .bold()
            .render(supports_color),
        ColoredText::dim(format!("({}/{} processed)", processed, total)).render(supports_color)
    )
}

/// Human-readable progress sink
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    excerpt_width: usize,
    supports_color: bool,
}

impl ConsoleEventSink {
    pub fn stdout(excerpt_width: usize, supports_color: bool) -> Self {
        Self::with_writer(io::stdout(), excerpt_width, supports_color)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        excerpt_width: usize,
        supports_color: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            excerpt_width,
            supports_color,
        }
    }
}

impl CompileEventSink for ConsoleEventSink {
    fn on_event(&self, event: CompileEvent) {
        if let CompileEvent::EntryFinished {
            index,
            total,
            outcome,
        } = event
        {
            let line = render_outcome_line(
                index,
                total,
                &outcome,
                self.excerpt_width,
                self.supports_color,
            );
            if let Ok(mut writer) = self.writer.lock() {
                let _ = writer.write_all(line.as_bytes());
                let _ = writer.flush();
            }
        }
    }
}
