use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::error::AppError;
use crate::model::{Entry, ListedEntry, ReportLine};
use crate::path::{dir_size, list_entries};
use crate::report::Report;

/// Sizes the immediate children of one directory.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// List the root and size every entry, one task per entry.
    ///
    /// Only listing the root itself can fail. Unreadable subtrees count as
    /// zero bytes and are logged.
    pub fn scan(&self) -> Result<Report, AppError> {
        let start = Instant::now();
        let listed = list_entries(&self.root)?;
        let expected = listed.len();
        debug!(root = %self.root.display(), entries = expected, "listed directory");

        let (tx, rx) = crossbeam_channel::unbounded::<ReportLine>();
        rayon::scope(|s| {
            for item in listed {
                let tx = tx.clone();
                s.spawn(move |_| {
                    let entry = size_entry(item);
                    let _ = tx.send(ReportLine::from(&entry));
                });
            }
        });
        drop(tx);

        let lines: Vec<ReportLine> = rx.iter().collect();
        debug_assert_eq!(lines.len(), expected, "one report line per top-level entry");

        debug!(entries = lines.len(), elapsed = ?start.elapsed(), "scan complete");
        Ok(Report::new(lines))
    }
}

/// Compute the size of one top-level entry. Directories are walked
/// sequentially on the calling thread.
pub fn size_entry(item: ListedEntry) -> Entry {
    let entry = if item.is_dir {
        Entry::directory(item.name, dir_size(&item.path))
    } else {
        Entry::file(item.name, item.len)
    };
    debug!(name = %entry.name, size = entry.size, is_dir = entry.is_dir, "sized entry");
    entry
}
