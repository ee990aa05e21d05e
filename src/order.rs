//! Deterministic ordering of collected files

use crate::collector::FileDescriptor;
use crate::error::Error;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How a scan is ordered before it is paged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Full path, ascending
    #[default]
    ByName,
    /// Modification time ascending, ties broken by full path ascending
    ByCreationTime,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::ByName => "name",
            SortMode::ByCreationTime => "timestamp_creation",
        }
    }

    /// Total order over descriptors of one scan.
    ///
    /// Paths are unique within a scan, so the path comparison always breaks
    /// a timestamp tie.
    pub fn compare(&self, a: &FileDescriptor, b: &FileDescriptor) -> Ordering {
        match self {
            SortMode::ByName => a.path.cmp(&b.path),
            SortMode::ByCreationTime => a
                .modified_at
                .cmp(&b.modified_at)
                .then_with(|| a.path.cmp(&b.path)),
        }
    }

    /// Sort the candidates and keep only their paths
    pub fn order(&self, mut files: Vec<FileDescriptor>) -> Vec<String> {
        files.sort_by(|a, b| self.compare(a, b));
        files.into_iter().map(|f| f.path).collect()
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" | "by-name" | "by_name" => Ok(SortMode::ByName),
            "timestamp_creation" | "by-creation-time" | "by_creation_time" => {
                Ok(SortMode::ByCreationTime)
            }
            other => Err(Error::invalid_argument(format!(
                "unsupported sort mode '{}' (expected 'name' or 'timestamp_creation')",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    fn file(path: &str, secs: u64) -> FileDescriptor {
        FileDescriptor {
            path: path.to_string(),
            extension: ".ext".to_string(),
            modified_at: SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
        }
    }

    #[test]
    fn test_order_by_name() {
        let files = vec![
            file("root/dir_2/b.ext", 1),
            file("root/dir_1/z.ext", 3),
            file("root/dir_1/a.ext", 2),
        ];
        assert_eq!(
            SortMode::ByName.order(files),
            vec!["root/dir_1/a.ext", "root/dir_1/z.ext", "root/dir_2/b.ext"]
        );
    }

    #[test]
    fn test_order_by_creation_time() {
        let files = vec![
            file("root/00_1.ext", 30),
            file("root/00_2.ext", 20),
            file("root/00_3.ext", 40),
            file("root/00_4.ext", 10),
        ];
        assert_eq!(
            SortMode::ByCreationTime.order(files),
            vec!["root/00_4.ext", "root/00_2.ext", "root/00_1.ext", "root/00_3.ext"]
        );
    }

    #[test]
    fn test_creation_time_ties_break_by_path() {
        let files = vec![
            file("root/c.ext", 5),
            file("root/a.ext", 5),
            file("root/b.ext", 1),
            file("root/d.ext", 5),
        ];
        assert_eq!(
            SortMode::ByCreationTime.order(files),
            vec!["root/b.ext", "root/a.ext", "root/c.ext", "root/d.ext"]
        );
    }

    #[test]
    fn test_order_is_independent_of_input_order() {
        let forward = vec![file("a", 2), file("b", 2), file("c", 1)];
        let mut backward = forward.clone();
        backward.reverse();
        for mode in [SortMode::ByName, SortMode::ByCreationTime] {
            assert_eq!(mode.order(forward.clone()), mode.order(backward.clone()));
        }
    }

    #[test]
    fn test_sort_mode_from_str() {
        assert_eq!("name".parse::<SortMode>().unwrap(), SortMode::ByName);
        assert_eq!(
            "timestamp_creation".parse::<SortMode>().unwrap(),
            SortMode::ByCreationTime
        );
        assert_eq!(
            "by-creation-time".parse::<SortMode>().unwrap(),
            SortMode::ByCreationTime
        );

        let err = "size".parse::<SortMode>().unwrap_err();
        assert!(err.to_string().contains("'size'"));
    }

    #[test]
    fn test_sort_mode_display_round_trips() {
        for mode in [SortMode::ByName, SortMode::ByCreationTime] {
            assert_eq!(mode.to_string().parse::<SortMode>().unwrap(), mode);
        }
    }
}
