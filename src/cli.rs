// src/cli.rs

use crate::constants::{DEFAULT_DAO_DIR, DEFAULT_SOURCE_SUFFIX};
use clap::Parser;

/// Rewrites `e.printStackTrace();` calls in DAO sources into `Logger.error(...)` calls.
///
/// daofix lists the source files of a data-access directory, inserts the logger
/// import after the database-connection import when it is missing, and replaces
/// every stack-trace print in catch blocks with a centralized logging call. Files
/// are rewritten in place. Run without arguments to process the project's DAO
/// directory relative to the current working directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the DAO source files to rewrite.
    #[arg(default_value = DEFAULT_DAO_DIR)]
    pub dao_dir: String,

    /// File-name suffix of the files to rewrite (a leading '.' is accepted).
    #[arg(short = 'e', long = "ext", value_name = "SUFFIX", default_value = DEFAULT_SOURCE_SUFFIX)]
    pub suffix: String,

    /// Perform a dry run. List the files that would be rewritten without writing them.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_arguments_use_fixed_defaults() {
        let cli = Cli::parse_from(["daofix"]);
        assert_eq!(cli.dao_dir, "src/main/java/com/college/dao");
        assert_eq!(cli.suffix, "java");
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["daofix", "legacy/dao", "--ext", ".jav", "-D"]);
        assert_eq!(cli.dao_dir, "legacy/dao");
        assert_eq!(cli.suffix, ".jav");
        assert!(cli.dry_run);
    }
}
