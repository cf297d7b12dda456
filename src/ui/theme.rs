//! Colors and glyphs of the terminal UI
//!
//! Views never spell a color or symbol themselves; everything comes from here
//! so the ASCII fallback stays complete.

use crossterm::style::Color;

/// A symbol and the plain-ASCII text shown in its place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub unicode: &'static str,
    pub ascii: &'static str,
}

impl Glyph {
    const fn new(unicode: &'static str, ascii: &'static str) -> Self {
        Self { unicode, ascii }
    }

    pub fn pick(self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod glyphs {
    use super::Glyph;

    pub const SUCCESS: Glyph = Glyph::new("✓", "[OK]");
    pub const ERROR: Glyph = Glyph::new("✗", "[ERROR]");
    pub const WARNING: Glyph = Glyph::new("⚠", "[WARN]");
    pub const ARROW: Glyph = Glyph::new("↳", "[>]");

    pub const BUILD: Glyph = Glyph::new("⚒", "[BUILD]");
    pub const PLAN: Glyph = Glyph::new("☰", "[PLAN]");
    pub const CLASSIFY: Glyph = Glyph::new("◇", "[CLASSIFY]");

    pub const TOP_LEFT: Glyph = Glyph::new("╭", "+");
    pub const TOP_RIGHT: Glyph = Glyph::new("╮", "+");
    pub const BOTTOM_LEFT: Glyph = Glyph::new("╰", "+");
    pub const BOTTOM_RIGHT: Glyph = Glyph::new("╯", "+");
    pub const HORIZONTAL: Glyph = Glyph::new("─", "-");
    pub const VERTICAL: Glyph = Glyph::new("│", "|");
}

/// Per-entry progress tags. Identical in both modes so build logs stay greppable.
pub mod tags {
    pub const OK: &str = "[OK]";
    pub const ERROR: &str = "[ERROR]";
}
