// src/output/mod.rs

//! Reports processed files.
//!
//! The `Reporter` prints one line per file as soon as it is recorded and keeps
//! the names in order; `finish` prints the total and hands back the list as a
//! `FixReport`.

use crate::constants::{DRY_RUN_FIXED_PREFIX, FIXED_PREFIX};
use crate::errors::Result;
use std::io::Write;

pub mod summary;

/// The files processed during one run, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    /// File names (basenames) of every file reported as fixed.
    pub fixed_files: Vec<String>,
}

impl FixReport {
    /// Number of files reported as fixed.
    pub fn count(&self) -> usize {
        self.fixed_files.len()
    }
}

/// Accumulates fixed files for a single run and writes the report lines.
pub struct Reporter<'w> {
    writer: &'w mut dyn Write,
    dry_run: bool,
    report: FixReport,
}

impl<'w> Reporter<'w> {
    /// Creates a reporter writing to `writer`. In dry-run mode the lines say
    /// what would be fixed instead.
    pub fn new(writer: &'w mut dyn Write, dry_run: bool) -> Self {
        Self {
            writer,
            dry_run,
            report: FixReport::default(),
        }
    }

    /// Records one processed file and prints its `Fixed: <name>` line.
    pub fn record(&mut self, file_name: &str) -> Result<()> {
        let prefix = if self.dry_run {
            DRY_RUN_FIXED_PREFIX
        } else {
            FIXED_PREFIX
        };
        writeln!(self.writer, "{}: {}", prefix, file_name)?;
        self.report.fixed_files.push(file_name.to_string());
        Ok(())
    }

    /// Prints the total count and returns the accumulated report.
    pub fn finish(self) -> Result<FixReport> {
        summary::write_summary(&mut *self.writer, self.report.count(), self.dry_run)?;
        self.writer.flush()?;
        Ok(self.report)
    }
}
