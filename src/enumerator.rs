//! Resumable enumeration: collect, order, page, remember
//!
//! Each call is one pass over the tree. Nothing is kept in memory between
//! calls; progress lives only in the [`CursorStore`].

use crate::collector::{self, CollectOptions};
use crate::cursor::CursorStore;
use crate::error::{Error, Result};
use crate::order::SortMode;
use crate::paginate::paginate;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Inputs for one enumeration call
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Root of the walk; its string form is also the cursor scope
    pub path: PathBuf,
    pub count: usize,
    /// Extensions with the leading dot, e.g. `".mkv"`
    pub extensions: Vec<String>,
    pub sort_mode: SortMode,
}

impl PageRequest {
    pub fn new(
        path: impl Into<PathBuf>,
        count: usize,
        extensions: Vec<String>,
        sort_mode: SortMode,
    ) -> Self {
        Self {
            path: path.into(),
            count,
            extensions,
            sort_mode,
        }
    }

    pub fn scope(&self) -> Result<&str> {
        scope_of(&self.path)
    }

    fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::invalid_argument("path is empty"));
        }
        self.scope()?;
        if self.count == 0 {
            return Err(Error::invalid_argument("count must be greater than zero"));
        }
        if self.extensions.is_empty() {
            return Err(Error::invalid_argument("at least one extension is required"));
        }
        Ok(())
    }
}

/// Paths returned by one call, in sequence order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Page {
    files: Vec<String>,
}

impl Page {
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn into_files(self) -> Vec<String> {
        self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Hands out successive pages of a directory tree across runs
pub struct Enumerator<S> {
    store: S,
    options: CollectOptions,
}

impl<S: CursorStore> Enumerator<S> {
    pub fn new(store: S) -> Self {
        Self::with_options(store, CollectOptions::default())
    }

    pub fn with_options(store: S, options: CollectOptions) -> Self {
        Self { store, options }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Return the next page for `request` and move the cursor past it
    ///
    /// The cursor is written only when the page is non-empty, and a failed
    /// write is returned as an error instead of the page, so a caller never
    /// sees files whose progress was not recorded.
    pub fn next_page(&mut self, request: &PageRequest) -> Result<Page> {
        request.validate()?;

        let files = collector::collect(&request.path, &request.extensions, &self.options)?;
        if files.is_empty() {
            tracing::debug!("no matching files under {}", request.path.display());
            return Ok(Page::default());
        }

        let sequence = request.sort_mode.order(files);
        let scope = request.scope()?;
        let last_returned = self.store.load(scope)?;

        if sequence.last().is_some_and(|last| *last == last_returned) {
            tracing::debug!("{} is fully drained", scope);
            return Ok(Page::default());
        }

        let files = paginate(&sequence, request.count, &last_returned)?;
        let Some(last) = files.last() else {
            tracing::warn!(
                "cursor {} is no longer under {}; returning nothing",
                last_returned,
                scope
            );
            return Ok(Page::default());
        };

        self.store.save(scope, last)?;
        tracing::debug!(
            "returning {} of {} files ({})",
            files.len(),
            sequence.len(),
            request.sort_mode
        );
        Ok(Page { files })
    }
}

/// Cursor scope for a walk root: the root exactly as given, which must be UTF-8
pub fn scope_of(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        Error::invalid_argument(format!("path {} is not valid UTF-8", path.display()))
    })
}

/// One-shot form of [`Enumerator::next_page`]
pub fn get_next_files<S: CursorStore>(
    store: S,
    path: &Path,
    count: usize,
    extensions: &[String],
    sort_mode: SortMode,
) -> Result<Vec<String>> {
    let request = PageRequest::new(path, count, extensions.to_vec(), sort_mode);
    Enumerator::new(store)
        .next_page(&request)
        .map(Page::into_files)
}
