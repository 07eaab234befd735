use std::fs;
use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use crate::error::AppError;
use crate::model::ListedEntry;

/// Validate `dir` and list its immediate children in OS order.
pub fn list_entries(dir: &Path) -> Result<Vec<ListedEntry>, AppError> {
    let metadata = fs::metadata(dir).map_err(|err| AppError::stat(dir, err))?;
    if !metadata.is_dir() {
        return Err(AppError::NotADirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|err| AppError::read_dir(dir, err))? {
        let entry = entry.map_err(|err| AppError::read_dir(dir, err))?;
        // DirEntry::metadata does not traverse symlinks.
        let metadata = entry.metadata().map_err(|err| AppError::read_dir(dir, err))?;
        entries.push(ListedEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            is_dir: metadata.is_dir(),
            len: metadata.len(),
        });
    }
    Ok(entries)
}

/// Sum the sizes of everything below `path` that is not a directory.
///
/// Best effort: a directory that cannot be read contributes nothing and the
/// walk carries on with its siblings. Symlinks are counted, not followed.
pub fn dir_size(path: &Path) -> u64 {
    let mut total = 0u64;
    for entry in WalkDir::new(path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(path = ?err.path(), error = %err, "failed to get directory size");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => {
                total = total.saturating_add(metadata.len());
            }
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "failed to get file size");
            }
        }
    }
    total
}
