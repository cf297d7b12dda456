use questc::QuestError;

use crate::ui::json::events;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Stable error code for JSON output
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<QuestError>()
        .map(QuestError::code)
        .unwrap_or("error")
}

fn hint(err: &QuestError) -> Option<&'static str> {
    match err {
        QuestError::ManifestNotFound { .. } => {
            Some("Check `paths.manifest` in questc.toml, or pass --manifest / -C <quest root>.")
        }
        QuestError::InvalidConfig { .. } => Some("Fix the configuration file or pass --config."),
        _ => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {} {:#}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("Error:").bold().render(supports_color),
        err
    );
    if let Some(hint) = err.downcast_ref::<QuestError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if json {
        let _ = crate::ui::json::emit_event(&events::error(
            command,
            error_code(err),
            format!("{:#}", err),
        ));
        return;
    }

    let caps = crate::ui::terminal::TerminalCapabilities::probe();
    eprint!(
        "{}",
        format_error_with(err, caps.supports_color, caps.supports_unicode)
    );
}
