//! Error excerpts extracted from compiler output

/// Excerpt recorded when the compiler exceeds its timeout
pub const TIMEOUT_EXCERPT: &str = "Compilation timeout";

/// Excerpt recorded when a failing compiler printed nothing
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Upper bound on stored excerpt length, in characters
pub const MAX_EXCERPT_LEN: usize = 512;

/// First line of captured output, bounded to [`MAX_EXCERPT_LEN`].
///
/// Only the literal first line is considered. When it is blank (including
/// empty output) the excerpt is [`UNKNOWN_ERROR`].
pub fn first_line_excerpt(output: &str) -> String {
    let first = output.lines().next().unwrap_or_default().trim_end();
    if first.trim_start().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        clip(first, MAX_EXCERPT_LEN)
    }
}

/// Clip `text` to at most `width` characters on a char boundary.
pub fn clip(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
