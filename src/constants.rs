// src/constants.rs

/// Directory scanned when no directory is given, relative to the working directory.
pub const DEFAULT_DAO_DIR: &str = "src/main/java/com/college/dao";

/// File-name suffix (without the dot) of the source files to rewrite.
pub const DEFAULT_SOURCE_SUFFIX: &str = "java";

/// Import line that marks where the logger import is inserted.
pub const DB_CONNECTION_IMPORT: &str = "import com.college.utils.DatabaseConnection;";

/// Import line for the centralized logging utility.
pub const LOGGER_IMPORT: &str = "import com.college.utils.Logger;";

/// Message passed to every generated `Logger.error` call.
pub const LOG_ERROR_MESSAGE: &str = "Database operation failed";

/// Prefix for each per-file report line.
pub const FIXED_PREFIX: &str = "Fixed";

/// Prefix for the final report line.
pub const TOTAL_PREFIX: &str = "Total files fixed";

/// Dry-run counterparts of the report prefixes.
pub const DRY_RUN_FIXED_PREFIX: &str = "Would fix";
pub const DRY_RUN_TOTAL_PREFIX: &str = "Total files to fix";
