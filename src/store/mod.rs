pub mod disk;
pub mod memory;

use crate::core::config::{AppConfig, StorageKind};
use crate::core::storage::Storage;
use anyhow::{Context, Result};
use disk::DiskStorage;
use memory::MemoryStorage;
use tracing::debug;

/// Opens the storage backend selected by `config`.
pub fn open_storage(config: &AppConfig) -> Result<Box<dyn Storage>> {
    match config.storage {
        StorageKind::Memory => {
            debug!("Using in-memory storage");
            Ok(Box::new(MemoryStorage::new()))
        }
        StorageKind::Disk => {
            let path = config.default_data_path()?.join("store");
            let storage = DiskStorage::open(&path)
                .with_context(|| format!("Failed to open storage at {}", path.display()))?;
            Ok(Box::new(storage))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expense_store::STORAGE_KEY;
    use tempfile::tempdir;

    #[test]
    fn test_open_disk_storage_under_data_path() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            data_path: Some(dir.path().to_string_lossy().into_owned()),
            ..Default::default()
        };

        let storage = open_storage(&config).unwrap();
        storage.set_item(STORAGE_KEY, "[]").unwrap();
        assert!(dir.path().join("store").exists());
    }

    #[test]
    fn test_open_memory_storage() {
        let config = AppConfig {
            storage: StorageKind::Memory,
            ..Default::default()
        };

        let storage = open_storage(&config).unwrap();
        assert!(storage.get_item(STORAGE_KEY).unwrap().is_none());
    }
}
