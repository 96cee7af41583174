//! `daofix` is a library and command-line tool that rewrites the error-handling
//! idiom `e.printStackTrace();` in DAO (data access object) source files into
//! calls to a centralized logger.
//!
//! As a library, it provides a small three-stage pipeline:
//! 1.  **Locate**: List the source files in the target directory.
//! 2.  **Rewrite**: Insert the logger import and replace stack-trace prints, in place.
//! 3.  **Report**: Print `Fixed: <name>` per file and the final total.
//!
//! The rewrite is textual. It only recognises the catch-block idiom with the
//! exception variable `e` and a `;` terminator; no source is parsed.
//!
//! # Example: Library Usage
//!
//! ```
//! use daofix::{run, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Set up a temporary DAO directory.
//! let temp_dir = tempdir()?;
//! fs::write(
//!     temp_dir.path().join("UserDAO.java"),
//!     "import com.college.utils.DatabaseConnection;\n\
//!      class UserDAO {\n    void f() {\n        try { g(); } catch (Exception e) {\n            e.printStackTrace();\n        }\n    }\n}\n",
//! )?;
//!
//! // 2. Point the configuration at it.
//! let config = ConfigBuilder::new()
//!     .dao_dir(temp_dir.path().to_string_lossy())
//!     .build()?;
//!
//! // 3. Run the pipeline, capturing the report in a buffer.
//! let mut output = Vec::new();
//! let report = run(&config, &mut output)?;
//!
//! assert_eq!(report.fixed_files, vec!["UserDAO.java"]);
//! assert_eq!(
//!     String::from_utf8(output)?,
//!     "Fixed: UserDAO.java\n\nTotal files fixed: 1\n"
//! );
//!
//! let rewritten = fs::read_to_string(temp_dir.path().join("UserDAO.java"))?;
//! assert!(rewritten.contains("import com.college.utils.Logger;"));
//! assert!(rewritten.contains("            Logger.error(\"Database operation failed\", e);"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::{FileInfo, RewriteOutcome};
pub use output::{FixReport, Reporter};
pub use processing::filters;

use crate::errors::Result;
use std::io::Write;

/// Lists the candidate files for a run.
///
/// This is the first stage of the pipeline. It returns every file directly in
/// `config.dao_dir` whose name ends with the configured suffix, sorted by
/// name. No file is opened at this stage.
///
/// # Errors
/// Returns `Error::DirectoryAccess` if the directory is missing or unreadable.
pub fn locate(config: &Config) -> Result<Vec<FileInfo>> {
    discovery::locate_files(config)
}

/// Rewrites one located file in place.
///
/// This is the second stage of the pipeline. See
/// [`processing::rewrite_file`] for the exact behaviour.
///
/// # Errors
/// Returns `Error::FileIo` if the file cannot be read or written.
pub fn rewrite(file: &FileInfo, config: &Config) -> Result<RewriteOutcome> {
    processing::rewrite_file(file, config)
}

/// Executes the complete pipeline: locate, rewrite each file, report.
///
/// Files are handled strictly one after another. Each file is reported as
/// fixed as soon as it has been rewritten without error, whether or not any
/// rule changed it. The run stops at the first error; files rewritten before
/// that stay rewritten and their report lines stay printed.
///
/// # Arguments
/// * `config` - The configuration for the run.
/// * `writer` - Destination of the report lines (stdout for the binary).
///
/// # Returns
/// The `FixReport` listing the processed files in order.
pub fn run(config: &Config, writer: &mut dyn Write) -> Result<FixReport> {
    let files = locate(config)?;
    log::info!(
        "Rewriting {} file(s) in {}",
        files.len(),
        config.dao_dir.display()
    );

    let mut reporter = Reporter::new(writer, config.dry_run);
    for file in &files {
        let outcome = rewrite(file, config)?;
        log::debug!(
            "{}: changed={}, written={}",
            file.file_name,
            outcome.changed,
            outcome.written
        );
        reporter.record(&file.file_name)?;
    }
    reporter.finish()
}
