//! Locates the source files to rewrite in the target directory.
use crate::config::Config;
use crate::core_types::FileInfo;
use crate::errors::{dir_error_with_path, Result};
use crate::filtering::has_source_suffix;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Lists the files directly inside `config.dao_dir` whose names end with the configured suffix.
///
/// The listing is not recursive. Subdirectories (even ones named like a source
/// file) and files with other suffixes are skipped without being opened.
/// Symlinks are followed, so a linked source file is a candidate. The result
/// is sorted by file name and fully collected before it is returned, so a
/// listing failure happens before any file is rewritten.
///
/// # Errors
/// Returns `Error::DirectoryAccess` if the directory does not exist, is not a
/// directory, or one of its entries cannot be read.
///
/// # Examples
///
/// ```
/// use daofix::{locate, ConfigBuilder};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("UserDAO.java"), "class UserDAO {}")?;
/// fs::write(temp.path().join("notes.txt"), "todo")?;
///
/// let config = ConfigBuilder::new()
///     .dao_dir(temp.path().to_string_lossy())
///     .build()?;
/// let files = locate(&config)?;
///
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].file_name, "UserDAO.java");
/// # Ok(())
/// # }
/// ```
pub fn locate_files(config: &Config) -> Result<Vec<FileInfo>> {
    let dir = config.dao_dir.as_path();
    ensure_directory(dir)?;

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry_result in walker {
        let entry = entry_result.map_err(|e| {
            let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
            dir_error_with_path(io::Error::from(e), path)
        })?;

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_file() {
            debug!("Skipping non-file entry: {}", entry.path().display());
            continue;
        }
        if !has_source_suffix(&file_name, &config.suffix) {
            debug!("Skipping file without .{} suffix: {}", config.suffix, file_name);
            continue;
        }

        files.push(FileInfo {
            path: entry.into_path(),
            file_name,
        });
    }

    debug!(
        "Located {} candidate file(s) in {}",
        files.len(),
        dir.display()
    );
    Ok(files)
}

/// Fails with `Error::DirectoryAccess` unless `dir` exists and is a directory.
fn ensure_directory(dir: &Path) -> Result<()> {
    let metadata = fs::metadata(dir).map_err(|e| dir_error_with_path(e, dir))?;
    if !metadata.is_dir() {
        return Err(dir_error_with_path(
            io::Error::new(io::ErrorKind::Other, "not a directory"),
            dir,
        ));
    }
    Ok(())
}
