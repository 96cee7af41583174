//! Defines the core `Config` struct for a `daofix` run.
//!
//! This module consolidates the settings parsed and validated from the CLI,
//! making them available to the locate, rewrite and report stages in a
//! structured and type-safe manner.

use crate::processing::filters::ContentFilter;
use std::fmt;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;

/// Holds all settings for a run, ready to be used by the core logic.
pub struct Config {
    /// Directory whose source files are rewritten. Relative paths resolve
    /// against the process working directory.
    pub dao_dir: PathBuf,
    /// File-name suffix (without the leading dot) a file must end with to be rewritten.
    pub suffix: String,
    /// If `true`, compute rewrites and report them without writing any file.
    pub dry_run: bool,
    /// Rewrite rules applied in order to the content of every file.
    pub content_filters: Vec<Box<dyn ContentFilter>>,
}

// Custom Debug implementation, as Box<dyn ContentFilter> does not implement Debug.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("dao_dir", &self.dao_dir)
            .field("suffix", &self.suffix)
            .field("dry_run", &self.dry_run)
            .field("content_filters", &self.content_filters)
            .finish()
    }
}
