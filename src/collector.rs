use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

/// A file found during one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Path as yielded by the walk (root joined with the relative part)
    pub path: String,
    /// Extension including the leading dot, empty if the name has none
    pub extension: String,
    pub modified_at: SystemTime,
}

/// Walk behaviour that does not change what a match is
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Descend into symlinked directories. When false a symlink is
    /// reported as a plain entry and never descended into.
    pub follow_links: bool,
    /// Files whose path matches any of these are skipped
    pub exclude: GlobSet,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            follow_links: false,
            exclude: GlobSet::empty(),
        }
    }
}

impl CollectOptions {
    /// Compile exclusion patterns, rejecting any that are not valid globs
    pub fn with_exclude(mut self, patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                Error::invalid_argument(format!("bad exclude pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }
        self.exclude = builder
            .build()
            .map_err(|e| Error::invalid_argument(format!("bad exclude patterns: {}", e)))?;
        Ok(self)
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

/// Collect every file under `root` whose extension equals one of `extensions`
///
/// Matching is exact and case-sensitive (`".mkv"` does not match `"a.MKV"`).
/// Directories are walked but never returned. Any walk error aborts the whole
/// collection, and so does a matching file whose path is not valid UTF-8.
/// An empty filter list walks the tree and returns nothing.
pub fn collect(
    root: &Path,
    extensions: &[String],
    options: &CollectOptions,
) -> Result<Vec<FileDescriptor>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(options.follow_links) {
        let entry = entry.map_err(|e| Error::scan(root, e))?;

        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let extension = extension_of(&name);
        if !extensions.iter().any(|wanted| wanted == extension) {
            continue;
        }

        let path = entry.path();
        if options.exclude.is_match(path) {
            continue;
        }
        let Some(path_str) = path.to_str() else {
            return Err(Error::non_utf8(path));
        };

        let modified_at = entry
            .metadata()
            .map_err(|e| Error::scan(root, e))?
            .modified()
            .map_err(|source| Error::Scan {
                path: path.to_path_buf(),
                source,
            })?;

        files.push(FileDescriptor {
            path: path_str.to_string(),
            extension: extension.to_string(),
            modified_at,
        });
    }

    tracing::debug!("collected {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Extension of a file name, from the last dot on (`"a.tar.gz"` -> `".gz"`)
fn extension_of(name: &str) -> &str {
    name.rfind('.').map(|i| &name[i..]).unwrap_or("")
}
