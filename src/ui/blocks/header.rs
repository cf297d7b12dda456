use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Command title followed by aligned `Label: value` fields
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    fields: Vec<(&'static str, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: &'static str, value: impl ToString) -> Self {
        self.fields.push((label, value.to_string()));
        self
    }

    pub fn field_if(self, show: bool, label: &'static str, value: impl ToString) -> Self {
        if show {
            self.field(label, value)
        } else {
            self
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str()).bold().render(supports_color)
        );

        // Values line up one column past the longest "Label:".
        let column = self.fields.iter().map(|(l, _)| l.len() + 1).max().unwrap_or(0);
        for (label, value) in &self.fields {
            let padded = format!("{:<column$}", format!("{label}:"));
            out.push_str(&ColoredText::dim(padded).render(supports_color));
            out.push(' ');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}
