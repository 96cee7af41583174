//! Handles the rewrite stage of the `daofix` pipeline.
//!
//! Each located file is read in full, passed through the configured rewrite
//! rules in order, and written back to the same path. Files are handled one at
//! a time; the first I/O error stops the run.

use crate::config::Config;
use crate::core_types::{FileInfo, RewriteOutcome};
use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs;

pub mod filters;

use filters::ContentFilter;

/// Converts `\r\n` and lone `\r` line endings to `\n`.
///
/// Content without any `\r` is returned as is.
///
/// # Examples
///
/// ```
/// use daofix::processing::normalize_line_endings;
///
/// assert_eq!(normalize_line_endings("a\r\nb\rc\n".to_string()), "a\nb\nc\n");
/// ```
pub fn normalize_line_endings(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Applies `filters` to `content` in order.
///
/// Returns the rewritten content and the names of the rules that changed it.
///
/// # Examples
///
/// ```
/// use daofix::processing::{filters::default_filters, rewrite_content};
///
/// let source = "import com.college.utils.Logger;\nclass A {\n    void f() {\n        e.printStackTrace();\n    }\n}";
/// let (rewritten, applied) = rewrite_content(source, &default_filters());
///
/// assert!(rewritten.contains("        Logger.error(\"Database operation failed\", e);"));
/// assert_eq!(applied, vec!["ReplacePrintStackTraceFilter"]);
/// ```
pub fn rewrite_content(
    content: &str,
    filters: &[Box<dyn ContentFilter>],
) -> (String, Vec<&'static str>) {
    let mut rules_applied = Vec::new();
    let mut current = content.to_string();
    for filter in filters {
        let next = filter.apply(&current);
        if next != current {
            rules_applied.push(filter.name());
        }
        current = next;
    }
    (current, rules_applied)
}

/// Rewrites a single file in place.
///
/// The content is read as UTF-8, its line endings are normalized to `\n`,
/// it is transformed with `config.content_filters`, and it is written back to `file.path`, truncating the old content. The file is
/// written even when no rule matched. In dry-run mode nothing is written.
///
/// # Errors
/// Returns `Error::FileIo` if the file cannot be read (including content that
/// is not valid UTF-8) or written.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file.file_name))]
pub fn rewrite_file(file: &FileInfo, config: &Config) -> Result<RewriteOutcome> {
    let raw = fs::read_to_string(&file.path).map_err(|e| io_error_with_path(e, &file.path))?;
    let original = normalize_line_endings(raw.clone());
    if original.len() != raw.len() {
        debug!("Normalized line endings in {}", file.file_name);
    }

    let (rewritten, rules_applied) = rewrite_content(&original, &config.content_filters);
    let changed = rewritten != raw;
    for rule in &rules_applied {
        debug!("Rule '{}' modified {}", rule, file.file_name);
    }
    if rules_applied.is_empty() {
        debug!("No rule matched in {}; content unchanged", file.file_name);
    }

    let written = if config.dry_run {
        debug!("Dry run: not writing {}", file.path.display());
        false
    } else {
        fs::write(&file.path, rewritten.as_bytes())
            .map_err(|e| io_error_with_path(e, &file.path))?;
        true
    };

    Ok(RewriteOutcome {
        changed,
        rules_applied,
        written,
    })
}
