//! Section/key document backing the file cursor store

use crate::error::StoreError;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

type Sections = BTreeMap<String, BTreeMap<String, String>>;

/// A whole cursor file held in memory
///
/// Stored as TOML with one table per section and string values only:
///
/// ```toml
/// ["media/shows"]
/// last = "media/shows/s01/e03.mkv"
/// ```
#[derive(Debug, Clone, Default)]
pub struct CursorFile {
    path: PathBuf,
    sections: Sections,
}

impl CursorFile {
    /// An empty document that will be written to `path` on save
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            sections: Sections::new(),
        }
    }

    /// Read the file at `path`; a file that does not exist yet loads empty
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let sections = match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Sections::new(),
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            sections,
        })
    }

    /// Value of `key` in `section`, or `""` when either is absent
    pub fn get(&self, section: &str, key: &str) -> &str {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Drop a whole section, returning whether it existed
    pub fn remove_section(&mut self, section: &str) -> bool {
        self.sections.remove(section).is_some()
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Rewrite the file through a sibling temp file renamed over the target
    pub fn save(&self) -> Result<(), StoreError> {
        let content = toml::to_string(&self.sections)?;
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let tmp_path = self.temp_path();
        fs::write(&tmp_path, content).map_err(write_err)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(e));
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cursors".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}
