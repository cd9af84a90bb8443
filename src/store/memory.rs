use crate::core::error::{Result, StoreError};
use crate::core::storage::Storage;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// In-memory storage backed by a HashMap behind an RwLock.
///
/// Clones share the same slots.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .inner
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let value = slots.get(key).cloned();
        if value.is_some() {
            debug!("Storage HIT for key: {key}");
        } else {
            debug!("Storage MISS for key: {key}");
        }
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .inner
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        debug!("Storage PUT for key: {key}");
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
