use serde::Serialize;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Static classification of one quest file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub path: String,
    pub file_name: String,
    pub known: bool,
}

pub fn render_classification(
    items: &[Classification],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = CommandHeader::new(Icon::Classify, "questc classify").render(supports_color, supports_unicode);

    let width = items.iter().map(|i| i.path.chars().count()).max().unwrap_or(0);
    for item in items {
        let verdict = if item.known {
            ColoredText::info("preprocess").render(supports_color)
        } else {
            ColoredText::dim("compile as-is").render(supports_color)
        };
        out.push_str(&format!("  {:<width$}  {}\n", item.path, verdict, width = width));
    }
    out
}
