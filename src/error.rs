//! Error types shared by the enumeration pipeline

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures surfaced by [`crate::enumerator::Enumerator`] and its parts.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied something the pipeline cannot interpret
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The directory walk failed; no partial results are kept
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing the cursor store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Wrap a walk failure, keeping the entry that failed (or the root when
    /// walkdir does not know it)
    pub fn scan(root: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        Error::Scan {
            path,
            source: err.into(),
        }
    }

    /// A matched entry whose path is not valid UTF-8 and so cannot be a cursor
    pub fn non_utf8(path: &Path) -> Self {
        Error::Scan {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, "path is not valid UTF-8"),
        }
    }
}

/// Failures of the persisted cursor file.
///
/// A missing file is not an error: it loads as an empty document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read cursor file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse cursor file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize cursors: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write cursor file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::invalid_argument("count must be greater than zero");
        assert_eq!(err.to_string(), "invalid argument: count must be greater than zero");
    }

    #[test]
    fn test_store_error_names_path() {
        let err: Error = StoreError::Write {
            path: PathBuf::from("/tmp/cursors.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("/tmp/cursors.toml"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_non_utf8_is_scan_error() {
        let err = Error::non_utf8(Path::new("media/bad.ext"));
        assert!(matches!(&err, Error::Scan { path, .. } if path == Path::new("media/bad.ext")));
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
