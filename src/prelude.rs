//! The `daofix` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types and functions from the
//! `daofix` library.
//!
//! # Example
//!
//! ```
//! use daofix::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let filters = default_filters();
//! let (rewritten, applied) = rewrite_content("\n\te.printStackTrace();", &filters);
//! assert_eq!(rewritten, "\n\tLogger.error(\"Database operation failed\", e);");
//! assert_eq!(applied, vec!["ReplacePrintStackTraceFilter"]);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{FileInfo, RewriteOutcome};
pub use crate::errors::{Error, Result};
pub use crate::filtering::has_source_suffix;
pub use crate::output::{FixReport, Reporter};
pub use crate::processing::{
    filters::{
        default_filters, insert_logger_import, replace_print_stack_traces, ContentFilter,
        InsertLoggerImportFilter, ReplacePrintStackTraceFilter,
    },
    normalize_line_endings, rewrite_content,
};
pub use crate::{locate, rewrite, run};
