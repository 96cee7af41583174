//! Defines core data structures used throughout the application pipeline.
//!
//! `FileInfo` is produced by the locate stage and consumed by the rewrite
//! stage, which returns a `RewriteOutcome` for each file.

use std::path::PathBuf;

/// A candidate source file found in the target directory.
///
/// # Examples
///
/// ```
/// use daofix::core_types::FileInfo;
/// use std::path::PathBuf;
///
/// let file_info = FileInfo {
///     path: PathBuf::from("src/main/java/com/college/dao/UserDAO.java"),
///     file_name: "UserDAO.java".to_string(),
/// };
///
/// assert!(file_info.path.ends_with(&file_info.file_name));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Path used for both reading and writing back. Relative to the working
    /// directory when the target directory was given as a relative path.
    pub path: PathBuf,
    /// The file name (basename), used in report lines.
    pub file_name: String,
}

/// What the rewrite stage did to a single file.
///
/// This is diagnostic only: a file is reported as fixed whenever it was read
/// and written without error, whether or not `changed` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Whether the rewritten content differs from the original.
    pub changed: bool,
    /// Names of the rules that modified the content, in application order.
    pub rules_applied: Vec<&'static str>,
    /// Whether the content was written back to disk (false in dry-run mode).
    pub written: bool,
}
