// src/config/builder.rs

use super::{parsing::normalize_suffix, Config};
use crate::cli::Cli;
use crate::constants::{DEFAULT_DAO_DIR, DEFAULT_SOURCE_SUFFIX};
use crate::errors::Result;
use crate::processing::filters::{default_filters, ContentFilter};
use std::path::PathBuf;

/// A builder for creating a `Config` instance programmatically.
///
/// Every setting is optional; unset settings fall back to the fixed defaults,
/// so `ConfigBuilder::new().build()` describes the zero-argument run.
///
/// # Examples
///
/// ```
/// use daofix::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .dao_dir("legacy/dao")
///     .suffix(".java")
///     .dry_run(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.suffix, "java");
/// assert!(config.dry_run);
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    dao_dir: Option<String>,
    suffix: Option<String>,
    dry_run: Option<bool>,
    content_filters: Option<Vec<Box<dyn ContentFilter>>>,
}

impl ConfigBuilder {
    /// Creates a new builder with all settings unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            dao_dir: Some(cli.dao_dir),
            suffix: Some(cli.suffix),
            dry_run: Some(cli.dry_run),
            content_filters: None,
        }
    }

    /// Sets the directory whose files are rewritten.
    pub fn dao_dir(mut self, dir: impl Into<String>) -> Self {
        self.dao_dir = Some(dir.into());
        self
    }

    /// Sets the file-name suffix a file must end with.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Enables or disables dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Replaces the standard rewrite rules with a custom ordered set.
    pub fn content_filters(mut self, filters: Vec<Box<dyn ContentFilter>>) -> Self {
        self.content_filters = Some(filters);
        self
    }

    /// Validates the settings and builds the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::Config` if the suffix is empty or contains a path separator.
    pub fn build(self) -> Result<Config> {
        let suffix = normalize_suffix(self.suffix.as_deref().unwrap_or(DEFAULT_SOURCE_SUFFIX))?;
        let dao_dir = PathBuf::from(self.dao_dir.unwrap_or_else(|| DEFAULT_DAO_DIR.to_string()));
        let content_filters = self.content_filters.unwrap_or_else(default_filters);

        log::debug!(
            "Config built: dir={}, suffix=.{}, rules={}",
            dao_dir.display(),
            suffix,
            content_filters.len()
        );

        Ok(Config {
            dao_dir,
            suffix,
            dry_run: self.dry_run.unwrap_or(false),
            content_filters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use clap::Parser;

    #[test]
    fn test_defaults_describe_fixed_run() -> Result<()> {
        let config = ConfigBuilder::new().build()?;
        assert_eq!(config.dao_dir, PathBuf::from("src/main/java/com/college/dao"));
        assert_eq!(config.suffix, "java");
        assert!(!config.dry_run);
        let names: Vec<_> = config.content_filters.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["InsertLoggerImportFilter", "ReplacePrintStackTraceFilter"]
        );
        Ok(())
    }

    #[test]
    fn test_from_cli() -> Result<()> {
        let cli = Cli::parse_from(["daofix", "other/dao", "-e", ".java", "--dry-run"]);
        let config = ConfigBuilder::from_cli(cli).build()?;
        assert_eq!(config.dao_dir, PathBuf::from("other/dao"));
        assert_eq!(config.suffix, "java");
        assert!(config.dry_run);
        Ok(())
    }

    #[test]
    fn test_invalid_suffix_is_config_error() {
        let result = ConfigBuilder::new().suffix(".").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_custom_filters_replace_defaults() -> Result<()> {
        let config = ConfigBuilder::new().content_filters(Vec::new()).build()?;
        assert!(config.content_filters.is_empty());
        Ok(())
    }
}
