//! NDJSON build stream
//!
//! One object per line, each tagged with `event` and `command: "build"`.

use std::io::{self, Write};
use std::sync::Mutex;

use serde::Serialize;

use crate::domain::entities::{CompileOutcome, RunSummary};
use crate::domain::ports::{CompileEvent, CompileEventSink};

#[derive(Serialize)]
struct Line<'a> {
    command: &'static str,
    #[serde(flatten)]
    body: Body<'a>,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Body<'a> {
    Start {
        total: usize,
    },
    ItemStart {
        index: usize,
        total: usize,
        path: String,
    },
    ItemFinish {
        index: usize,
        total: usize,
        path: String,
        status: &'static str,
        preprocessed: bool,
        source: Option<String>,
        excerpt: Option<&'a str>,
        duration_ms: u64,
    },
    Interrupted {
        processed: usize,
        total: usize,
        compiled: usize,
        failed: usize,
        failed_entries: Vec<FailedLine<'a>>,
    },
    Complete {
        status: &'static str,
        total: usize,
        compiled: usize,
        failed: usize,
        failed_entries: Vec<FailedLine<'a>>,
    },
}

#[derive(Serialize)]
struct FailedLine<'a> {
    path: String,
    excerpt: Option<&'a str>,
}

impl<'a> FailedLine<'a> {
    fn all(summary: &'a RunSummary) -> Vec<Self> {
        summary
            .failed_entries
            .iter()
            .map(|f| FailedLine {
                path: f.entry.to_string(),
                excerpt: f.excerpt.as_deref(),
            })
            .collect()
    }
}

impl<'a> Body<'a> {
    fn finished(index: usize, total: usize, outcome: &'a CompileOutcome) -> Self {
        Body::ItemFinish {
            index,
            total,
            path: outcome.entry().to_string(),
            status: outcome.status().as_str(),
            preprocessed: outcome.preprocessed(),
            source: outcome.source_path().map(|p| p.display().to_string()),
            excerpt: outcome.excerpt(),
            duration_ms: u64::try_from(outcome.duration().as_millis()).unwrap_or(u64::MAX),
        }
    }

    fn completed(summary: &'a RunSummary) -> Self {
        Body::Complete {
            status: if summary.is_success() { "success" } else { "partial" },
            total: summary.total,
            compiled: summary.compiled_count,
            failed: summary.failed_count,
            failed_entries: FailedLine::all(summary),
        }
    }
}

/// Writes every compile event as one JSON line
pub struct JsonEventSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn emit(&self, body: Body<'_>) {
        let line = Line {
            command: "build",
            body,
        };
        let Ok(text) = serde_json::to_string(&line) else {
            return;
        };
        if let Ok(mut out) = self.out.lock() {
            // A closed stdout must not abort the build.
            let _ = writeln!(out, "{text}").and_then(|()| out.flush());
        }
    }
}

impl CompileEventSink for JsonEventSink {
    fn on_event(&self, event: CompileEvent) {
        match &event {
            CompileEvent::Started { total } => self.emit(Body::Start { total: *total }),
            CompileEvent::EntryStarted {
                index,
                total,
                entry,
            } => self.emit(Body::ItemStart {
                index: *index,
                total: *total,
                path: entry.to_string(),
            }),
            CompileEvent::EntryFinished {
                index,
                total,
                outcome,
            } => self.emit(Body::finished(*index, *total, outcome)),
            CompileEvent::Interrupted {
                processed,
                total,
                summary,
            } => self.emit(Body::Interrupted {
                processed: *processed,
                total: *total,
                compiled: summary.compiled_count,
                failed: summary.failed_count,
                failed_entries: FailedLine::all(summary),
            }),
            CompileEvent::Completed { summary } => self.emit(Body::completed(summary)),
        }
    }
}
