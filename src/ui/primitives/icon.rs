use crossterm::style::{Color, Stylize};

use crate::ui::theme::{colors, glyphs, Glyph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Build,
    Plan,
    Classify,
}

impl Icon {
    fn glyph(self) -> Glyph {
        match self {
            Icon::Success => glyphs::SUCCESS,
            Icon::Error => glyphs::ERROR,
            Icon::Warning => glyphs::WARNING,
            Icon::Arrow => glyphs::ARROW,
            Icon::Build => glyphs::BUILD,
            Icon::Plan => glyphs::PLAN,
            Icon::Classify => glyphs::CLASSIFY,
        }
    }

    fn color(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Arrow => colors::DIM,
            Icon::Build | Icon::Plan | Icon::Classify => colors::INFO,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        self.glyph().pick(supports_unicode)
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let symbol = self.render(supports_unicode);
        if supports_color {
            symbol.with(self.color()).to_string()
        } else {
            symbol.to_string()
        }
    }
}
