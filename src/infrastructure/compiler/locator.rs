//! Compiler binary resolution

use std::path::{Path, PathBuf};

/// Resolve the compiler program to run.
///
/// Order: `command` relative to the quest root (or as given, if absolute),
/// then each fallback relative to the quest root, then `command` as a bare
/// name for PATH lookup. Never fails; a wrong answer surfaces later as a
/// per-entry invocation error.
pub fn locate_compiler(command: &str, fallbacks: &[String], quest_root: &Path) -> PathBuf {
    let has_separator = command.contains('/') || command.contains('\\');

    let primary = quest_root.join(command);
    if primary.is_file() {
        tracing::debug!(path = %primary.display(), "compiler found in quest root");
        return absolute(&primary);
    }

    for fallback in fallbacks {
        let candidate = quest_root.join(fallback);
        if candidate.is_file() {
            tracing::info!(path = %candidate.display(), "using fallback compiler location");
            return absolute(&candidate);
        }
    }

    if has_separator {
        tracing::warn!(command, "compiler not found; invocations will fail");
        return absolute(&primary);
    }

    tracing::debug!(command, "resolving compiler through PATH");
    PathBuf::from(command)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
