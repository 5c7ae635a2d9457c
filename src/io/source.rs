//! Source enumeration: a single file or every regular file below a directory

use crate::io::error::{Result, TextCloudError, file_system};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect the files a source path refers to
///
/// Directories are walked recursively without following symbolic links, so
/// linked directories and linked files are skipped and link cycles cannot
/// repeat sources. The result is sorted for reproducible runs.
///
/// # Errors
///
/// Returns [`TextCloudError::InvalidPath`] if the path is neither a file nor a
/// directory, or a file system error if a directory cannot be listed
pub fn collect_files(source: &Path) -> Result<Vec<PathBuf>> {
    if source.is_file() {
        return Ok(vec![source.to_path_buf()]);
    }
    if !source.is_dir() {
        return Err(TextCloudError::InvalidPath {
            path: source.to_path_buf(),
            reason: "not a valid file or directory path".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            file_system(path, "list directory", e.into())
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Read one source as an identifier and its raw bytes
///
/// The identifier is the path as given, so it stays unique within a run.
///
/// # Errors
///
/// Returns a file system error if the file cannot be read
pub fn read_source(path: &Path) -> Result<(String, Vec<u8>)> {
    let bytes = std::fs::read(path).map_err(|e| file_system(path, "read source", e))?;
    Ok((path.display().to_string(), bytes))
}
