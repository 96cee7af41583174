// src/output/summary.rs

use crate::constants::{DRY_RUN_TOTAL_PREFIX, TOTAL_PREFIX};
use log::debug;
use std::io::{self, Write};

/// Writes the closing summary: an empty line, then the total count.
pub fn write_summary(writer: &mut dyn Write, count: usize, dry_run: bool) -> io::Result<()> {
    debug!("Writing summary for {} files...", count);
    let prefix = if dry_run {
        DRY_RUN_TOTAL_PREFIX
    } else {
        TOTAL_PREFIX
    };
    write!(writer, "\n{}: {}\n", prefix, count)
}
