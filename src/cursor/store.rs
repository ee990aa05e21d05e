use crate::cursor::document::CursorFile;
use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

const LAST_KEY: &str = "last";
const UPDATED_KEY: &str = "updated";

/// Resume marker for one scanned root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub scope: String,
    /// Last path returned to a caller, empty when nothing was returned yet
    pub last_returned: String,
    /// When the marker was last written, if the store records it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Durable mapping from scope (the scanned root) to the last returned path
///
/// An unknown scope is never an error; it reads as `""`.
pub trait CursorStore {
    fn load(&mut self, scope: &str) -> Result<String, StoreError>;

    fn save(&mut self, scope: &str, last_returned: &str) -> Result<(), StoreError>;

    /// Forget a scope, returning whether it had a cursor
    fn clear(&mut self, scope: &str) -> Result<bool, StoreError>;

    fn cursor(&mut self, scope: &str) -> Result<Cursor, StoreError> {
        Ok(Cursor {
            scope: scope.to_string(),
            last_returned: self.load(scope)?,
            updated_at: None,
        })
    }
}

impl<S: CursorStore + ?Sized> CursorStore for &mut S {
    fn load(&mut self, scope: &str) -> Result<String, StoreError> {
        (**self).load(scope)
    }

    fn save(&mut self, scope: &str, last_returned: &str) -> Result<(), StoreError> {
        (**self).save(scope, last_returned)
    }

    fn clear(&mut self, scope: &str) -> Result<bool, StoreError> {
        (**self).clear(scope)
    }

    fn cursor(&mut self, scope: &str) -> Result<Cursor, StoreError> {
        (**self).cursor(scope)
    }
}

/// Cursor store kept in a TOML file, one table per scope
///
/// Every operation re-reads the file so separate runs see each other's
/// progress. There is no locking: two writers on the same file race and the
/// last rename wins.
#[derive(Debug, Clone)]
pub struct FileCursorStore {
    path: PathBuf,
}

impl FileCursorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CursorStore for FileCursorStore {
    fn load(&mut self, scope: &str) -> Result<String, StoreError> {
        let doc = CursorFile::load(&self.path)?;
        Ok(doc.get(scope, LAST_KEY).to_string())
    }

    fn save(&mut self, scope: &str, last_returned: &str) -> Result<(), StoreError> {
        let mut doc = CursorFile::load(&self.path)?;
        doc.set(scope, LAST_KEY, last_returned);
        doc.set(scope, UPDATED_KEY, &Utc::now().to_rfc3339());
        doc.save()?;
        tracing::info!("cursor for {} advanced to {}", scope, last_returned);
        Ok(())
    }

    fn clear(&mut self, scope: &str) -> Result<bool, StoreError> {
        let mut doc = CursorFile::load(&self.path)?;
        if !doc.remove_section(scope) {
            return Ok(false);
        }
        doc.save()?;
        tracing::info!("cursor for {} cleared", scope);
        Ok(true)
    }

    fn cursor(&mut self, scope: &str) -> Result<Cursor, StoreError> {
        let doc = CursorFile::load(&self.path)?;
        let updated_at = DateTime::parse_from_rfc3339(doc.get(scope, UPDATED_KEY))
            .ok()
            .map(|t| t.with_timezone(&Utc));

        Ok(Cursor {
            scope: scope.to_string(),
            last_returned: doc.get(scope, LAST_KEY).to_string(),
            updated_at,
        })
    }
}
