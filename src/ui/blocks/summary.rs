use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Success,
    Partial,
    Stopped,
}

/// Boxed end-of-command summary: counts, then an optional list of failures
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    verdict: Verdict,
    stats: Vec<(String, usize)>,
    failures: Vec<(String, Option<String>)>,
    hidden_failures: usize,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn new(title: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            title: title.into(),
            verdict,
            stats: Vec::new(),
            failures: Vec::new(),
            hidden_failures: 0,
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, Verdict::Success)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, Verdict::Partial)
    }

    /// The command was cut short before finishing
    pub fn stopped(title: impl Into<String>) -> Self {
        Self::new(title, Verdict::Stopped)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// List a failed item with its (already clipped) diagnostic
    pub fn add_failure(&mut self, item: impl Into<String>, detail: Option<String>) {
        self.failures.push((item.into(), detail));
    }

    /// Count failures that were not listed
    pub fn set_hidden_failures(&mut self, count: usize) {
        self.hidden_failures = count;
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let tag = |icon: Icon, text: &str| {
            format!("{} {}", icon.colored(supports_color, supports_unicode), text)
        };

        let t = self.title.as_str();
        let (style, icon, title) = match self.verdict {
            Verdict::Success => (BoxStyle::Success, Icon::Success, ColoredText::success(t)),
            Verdict::Partial => (BoxStyle::Error, Icon::Error, ColoredText::error(t)),
            Verdict::Stopped => (BoxStyle::Warning, Icon::Warning, ColoredText::warning(t)),
        };
        let mut b = Box::titled(tag(icon, &title.bold().render(supports_color)), style);
        b.blank();
        for (label, count) in &self.stats {
            b.push(format!("{label}: {count}"));
        }

        if !self.failures.is_empty() || self.hidden_failures > 0 {
            b.blank();
        }
        for (item, detail) in &self.failures {
            b.push(tag(Icon::Error, item));
            if let Some(detail) = detail {
                b.push(format!("    {}", ColoredText::dim(detail.as_str()).render(supports_color)));
            }
        }
        if self.hidden_failures > 0 {
            b.push(format!("... and {} more", self.hidden_failures));
        }

        if !self.warnings.is_empty() {
            b.blank();
        }
        for warning in &self.warnings {
            b.push(tag(Icon::Warning, warning));
        }

        if let Some(next_step) = &self.next_step {
            b.blank();
            let hint = format!("{} {next_step}", ColoredText::dim("Next:").render(supports_color));
            b.push(tag(Icon::Arrow, &hint));
        }

        b.render(supports_color, supports_unicode)
    }
}
