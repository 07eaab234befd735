use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-wide error type for the dirscan CLI.
///
/// Every variant is fatal to a scan. Failures below the top level of the
/// scanned directory are logged and never surface here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("directory {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("failed to get dir {} stat: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {} dir: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn stat<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            AppError::NotFound(path.into())
        } else {
            AppError::Stat { path: path.into(), source }
        }
    }

    pub fn read_dir<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        AppError::ReadDir { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn stat_maps_not_found_kind() {
        let err = AppError::stat("/no/such", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, AppError::NotFound(ref path) if path == Path::new("/no/such")));
        assert_eq!(err.to_string(), "directory /no/such does not exist");
    }

    #[test]
    fn stat_keeps_other_kinds() {
        let err = AppError::stat("/locked/dir", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, AppError::Stat { ref source, .. }
            if source.kind() == io::ErrorKind::PermissionDenied));
        assert!(err.to_string().starts_with("failed to get dir /locked/dir stat: "));
    }

    #[test]
    fn read_dir_message_names_path() {
        let err = AppError::read_dir("/srv/data", io::Error::other("boom"));
        assert!(matches!(err, AppError::ReadDir { .. }));
        assert_eq!(err.to_string(), "failed to read /srv/data dir: boom");
    }
}
