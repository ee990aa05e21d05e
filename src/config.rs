//! User configuration (`config.toml`)
//!
//! Everything here is optional. A missing or broken file means defaults.

use crate::collector::CollectOptions;
use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "pagewalk";
const CURSOR_FILE_NAME: &str = "cursors.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cursor: CursorConfig,
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Where cursors are kept; defaults to the per-user data directory
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub follow_links: bool,
    /// Glob patterns for files to leave out
    pub exclude: Vec<String>,
}

impl Config {
    /// `<config dir>/pagewalk/config.toml`, if the platform has a home directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults if it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("ignoring unreadable config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Command-line values win over the file
    pub fn apply_cli_overrides(
        &mut self,
        cursor_file: Option<PathBuf>,
        follow_links: bool,
        exclude: Vec<String>,
    ) {
        if let Some(file) = cursor_file {
            self.cursor.file = Some(file);
        }
        if follow_links {
            self.scan.follow_links = true;
        }
        self.scan.exclude.extend(exclude);
    }

    /// Resolved cursor file location
    ///
    /// Falls back to `./cursors.toml` when no per-user data directory exists.
    pub fn cursor_file(&self) -> PathBuf {
        if let Some(file) = &self.cursor.file {
            return file.clone();
        }
        ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.data_dir().join(CURSOR_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CURSOR_FILE_NAME))
    }

    pub fn collect_options(&self) -> Result<CollectOptions> {
        CollectOptions::default()
            .with_follow_links(self.scan.follow_links)
            .with_exclude(&self.scan.exclude)
    }
}
