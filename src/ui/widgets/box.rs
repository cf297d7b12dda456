//! Bordered panel used by summaries

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthChar;

use crate::ui::primitives::border::BorderSet;
use crate::ui::theme;

/// Border color of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxStyle {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Box {
    rows: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn new(style: BoxStyle) -> Self {
        Self {
            rows: Vec::new(),
            style,
        }
    }

    /// Panel whose first row is `title`
    pub fn titled(title: impl Into<String>, style: BoxStyle) -> Self {
        let mut b = Self::new(style);
        b.push(title);
        b
    }

    /// Append text; embedded newlines start new rows.
    pub fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.rows.extend(text.lines().map(str::to_string));
    }

    pub fn blank(&mut self) {
        self.rows.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let border = BorderSet::for_terminal(supports_unicode);
        let widest = self.rows.iter().map(|r| display_width(r)).max().unwrap_or(0);
        let inner = widest + 2;
        let edge = |s: &str| paint(s, self.style, supports_color);

        let mut out = edge(&border.top(inner));
        out.push('\n');
        for row in &self.rows {
            let pad = (inner - 1).saturating_sub(display_width(row));
            out.push_str(&format!(
                "{v} {row}{pad}{v}\n",
                v = edge(border.vertical),
                pad = " ".repeat(pad)
            ));
        }
        out.push_str(&edge(&border.bottom(inner)));
        out.push('\n');
        out
    }
}

fn paint(s: &str, style: BoxStyle, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }
    let color = match style {
        BoxStyle::Success => theme::colors::SUCCESS,
        BoxStyle::Warning => theme::colors::WARNING,
        BoxStyle::Error => theme::colors::ERROR,
    };
    s.with(color).to_string()
}

/// Terminal columns taken by `s`, ignoring ANSI escape sequences
fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            in_escape = !c.is_ascii_alphabetic();
            continue;
        }
        if c == '\u{1b}' {
            in_escape = true;
            continue;
        }
        width += c.width().unwrap_or(0);
    }
    width
}
