//! Box-drawing characters, resolved once per render

use crate::ui::theme::{glyphs, Glyph};

/// Border glyphs for one output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

impl BorderSet {
    pub fn for_terminal(supports_unicode: bool) -> Self {
        let pick = |g: Glyph| g.pick(supports_unicode);
        Self {
            top_left: pick(glyphs::TOP_LEFT),
            top_right: pick(glyphs::TOP_RIGHT),
            bottom_left: pick(glyphs::BOTTOM_LEFT),
            bottom_right: pick(glyphs::BOTTOM_RIGHT),
            horizontal: pick(glyphs::HORIZONTAL),
            vertical: pick(glyphs::VERTICAL),
        }
    }

    /// Top edge spanning `inner` columns between the corners
    pub fn top(&self, inner: usize) -> String {
        format!("{}{}{}", self.top_left, self.horizontal.repeat(inner), self.top_right)
    }

    pub fn bottom(&self, inner: usize) -> String {
        format!(
            "{}{}{}",
            self.bottom_left,
            self.horizontal.repeat(inner),
            self.bottom_right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_edges() {
        let set = BorderSet::for_terminal(false);
        assert_eq!(set.top(3), "+---+");
        assert_eq!(set.bottom(0), "++");
        assert_eq!(set.vertical, "|");
    }

    #[test]
    fn unicode_edges_use_rounded_corners() {
        let set = BorderSet::for_terminal(true);
        assert_eq!(set.top(2), "╭──╮");
        assert_eq!(set.bottom(1), "╰─╯");
    }
}
