//! Provides a trait and implementations for the rewrite rules applied to file content.

use std::fmt;

mod import;
mod stack_trace;

// Re-export the standalone functions
pub use import::insert_logger_import;
pub use stack_trace::replace_print_stack_traces;

/// A trait for content rewrite rules.
///
/// Rules are applied sequentially to the content of each source file.
pub trait ContentFilter: Send + Sync {
    /// Applies the rule to the given content string.
    fn apply(&self, content: &str) -> String;
    /// Returns a descriptive name for the rule.
    fn name(&self) -> &'static str;
}

// Implement Debug manually for Box<dyn ContentFilter> by using the name method.
impl fmt::Debug for Box<dyn ContentFilter> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentFilter").field(&self.name()).finish()
    }
}

/// The standard rule set, in application order: import insertion, then call-site substitution.
pub fn default_filters() -> Vec<Box<dyn ContentFilter>> {
    vec![
        Box::new(InsertLoggerImportFilter),
        Box::new(ReplacePrintStackTraceFilter),
    ]
}

// --- Filter Implementations ---

/// Rule that adds the logger import after the database-connection import.
#[derive(Debug)]
pub struct InsertLoggerImportFilter;

impl ContentFilter for InsertLoggerImportFilter {
    fn apply(&self, content: &str) -> String {
        import::insert_logger_import(content)
    }
    fn name(&self) -> &'static str {
        "InsertLoggerImportFilter"
    }
}

/// Rule that turns `e.printStackTrace();` into a `Logger.error` call.
#[derive(Debug)]
pub struct ReplacePrintStackTraceFilter;

impl ContentFilter for ReplacePrintStackTraceFilter {
    fn apply(&self, content: &str) -> String {
        stack_trace::replace_print_stack_traces(content)
    }
    fn name(&self) -> &'static str {
        "ReplacePrintStackTraceFilter"
    }
}
