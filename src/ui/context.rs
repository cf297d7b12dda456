use crate::ui::terminal::TerminalCapabilities;
use questc::config::{ColorMode, Config};
use questc::presentation::cli::ColorWhen;

/// Output mode shared by every view of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, TerminalCapabilities::probe())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        Self {
            json,
            color: wants_color(cli_color, config.output.color, caps),
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }
}

/// `--color always|never` beats the config file; `auto` defers to it.
fn wants_color(cli: Option<ColorWhen>, configured: ColorMode, caps: TerminalCapabilities) -> bool {
    let mode = match cli {
        Some(ColorWhen::Always) => ColorMode::Always,
        Some(ColorWhen::Never) => ColorMode::Never,
        Some(ColorWhen::Auto) | None => configured,
    };
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => caps.supports_color && !caps.is_ci,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CI_TTY: TerminalCapabilities = TerminalCapabilities {
        supports_color: true,
        supports_unicode: true,
        is_ci: true,
    };

    #[test]
    fn auto_color_is_off_on_ci() {
        let ui = UiContext::from_caps(false, None, &Config::default(), CI_TTY);
        assert!(!ui.color);
        assert!(ui.unicode);
    }

    #[test]
    fn cli_flag_beats_config() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;
        assert!(!UiContext::from_caps(false, Some(ColorWhen::Never), &config, CI_TTY).color);
        assert!(UiContext::from_caps(false, Some(ColorWhen::Auto), &config, CI_TTY).color);

        let config = Config::default();
        assert!(UiContext::from_caps(false, Some(ColorWhen::Always), &config, CI_TTY).color);
    }

    #[test]
    fn config_can_force_ascii() {
        let mut config = Config::default();
        config.output.unicode = false;
        assert!(!UiContext::from_caps(true, None, &config, CI_TTY).unicode);
    }
}
