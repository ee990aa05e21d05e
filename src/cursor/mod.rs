//! Persisted resume markers
//!
//! A cursor records, per scanned root, the last path handed to a caller so
//! the next run can continue after it. Storage is behind [`CursorStore`] so the
//! enumerator can run against a TOML file in production and an in-memory map
//! in tests.

pub mod document;
pub mod memory;
pub mod store;

pub use document::CursorFile;
pub use memory::MemoryCursorStore;
pub use store::{Cursor, CursorStore, FileCursorStore};
