//! Pagewalk library crate
//!
//! Lists files under a directory tree a page at a time, remembering per
//! directory where the previous page ended. The CLI in `main.rs` is a thin
//! layer over [`enumerator::Enumerator`].

pub mod cli;
pub mod collector;
pub mod config;
pub mod cursor;
pub mod enumerator;
pub mod error;
pub mod logging;
pub mod order;
pub mod output;
pub mod paginate;
pub mod progress;

pub use collector::{CollectOptions, FileDescriptor};
pub use cursor::{Cursor, CursorStore, FileCursorStore, MemoryCursorStore};
pub use enumerator::{get_next_files, Enumerator, Page, PageRequest};
pub use error::{Error, Result, StoreError};
pub use order::SortMode;
