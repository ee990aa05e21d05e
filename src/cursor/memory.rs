use crate::cursor::store::CursorStore;
use crate::error::StoreError;
use std::collections::HashMap;

/// Non-persistent cursor store, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryCursorStore {
    cursors: HashMap<String, String>,
}

impl MemoryCursorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, scope: &str) -> Option<&str> {
        self.cursors.get(scope).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }
}

impl CursorStore for MemoryCursorStore {
    fn load(&mut self, scope: &str) -> Result<String, StoreError> {
        Ok(self.get(scope).unwrap_or_default().to_string())
    }

    fn save(&mut self, scope: &str, last_returned: &str) -> Result<(), StoreError> {
        self.cursors
            .insert(scope.to_string(), last_returned.to_string());
        Ok(())
    }

    fn clear(&mut self, scope: &str) -> Result<bool, StoreError> {
        Ok(self.cursors.remove(scope).is_some())
    }
}
