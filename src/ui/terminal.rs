//! What the attached terminal can display

use is_terminal::IsTerminal;

/// Variables whose presence marks a CI runner
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "JENKINS_HOME",
    "TEAMCITY_VERSION",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Inspect stdout and the process environment.
    pub fn probe() -> Self {
        Self::from_env(
            |key| std::env::var(key).ok().filter(|v| !v.is_empty()),
            std::io::stdout().is_terminal(),
        )
    }

    fn from_env(var: impl Fn(&str) -> Option<String>, stdout_is_tty: bool) -> Self {
        let dumb = var("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
        Self {
            supports_color: stdout_is_tty && !dumb && var("NO_COLOR").is_none(),
            supports_unicode: !dumb && utf8_locale(&var),
            is_ci: CI_MARKERS.iter().any(|k| var(k).is_some()),
        }
    }
}

/// The first of LC_ALL, LC_CTYPE, LANG that is set decides; none set counts as UTF-8.
fn utf8_locale(var: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(|key| var(key))
        .map_or(true, |locale| {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        })
}
