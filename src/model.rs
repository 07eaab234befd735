use std::fmt;
use std::path::PathBuf;

use crate::format::format_size;

/// An immediate child of the scanned directory, as returned by the lister.
#[derive(Debug, Clone)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Length from non-following metadata; the entry's own size, not its subtree.
    pub len: u64,
}

/// A sized top-level entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub size: u64,
    pub is_dir: bool,
}

impl Entry {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Entry { name: name.into(), size, is_dir: false }
    }

    pub fn directory(name: impl Into<String>, size: u64) -> Self {
        Entry { name: name.into(), size, is_dir: true }
    }
}

/// One tab-separated row of the report.
///
/// Ordering compares the full text byte-wise, which sorts rows by name
/// because every row starts with `Name: `.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportLine(String);

impl ReportLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tab-separated cells of the row.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.0.split('\t')
    }
}

impl From<&Entry> for ReportLine {
    fn from(entry: &Entry) -> Self {
        ReportLine(format!(
            "Name: {}\tSize: {}\tDirectory: {}",
            entry.name,
            format_size(entry.size),
            entry.is_dir
        ))
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
