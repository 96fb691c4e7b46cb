
use crate::error::ScanError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily enumerate candidate files under a root directory.
///
/// Symbolic links are never followed and never yielded; directories that
/// cannot be listed are skipped. Enumeration order is whatever the
/// filesystem reports, which is fine because the final output is sorted.
///
/// # Errors
/// Fails up front if the root is missing or not a directory, before any
/// file is touched.
pub fn walk(root: &Path) -> Result<impl Iterator<Item = PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::RootNotDirectory(root.to_path_buf()));
    }

    let iter = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && !entry.path_is_symlink())
        .map(|entry| entry.into_path());

    Ok(iter)
}
