// src/config/parsing.rs

use crate::errors::{Error, Result};

/// Normalizes a file-name suffix: surrounding whitespace and one leading '.' are removed.
///
/// The match stays case-sensitive, so the casing is kept as given.
pub(super) fn normalize_suffix(suffix: &str) -> Result<String> {
    let trimmed = suffix.trim();
    let normalized = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if normalized.is_empty() {
        return Err(Error::Config(format!(
            "file suffix must not be empty (got '{}')",
            suffix
        )));
    }
    if normalized.contains(['/', '\\']) {
        return Err(Error::Config(format!(
            "file suffix must not contain path separators (got '{}')",
            suffix
        )));
    }
    Ok(normalized.to_string())
}
