use crate::core::error::Result;
use crate::core::storage::Storage;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const PARTITION: &str = "slots";

/// Persistent storage on a fjall keyspace.
///
/// Every write is synced to the journal before returning.
pub struct DiskStorage {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStorage {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;

        let keyspace = Config::new(path).open()?;
        let partition = keyspace.open_partition(PARTITION, PartitionCreateOptions::default())?;
        debug!("Opened disk storage at {}", path.display());
        Ok(Self {
            keyspace,
            partition,
        })
    }
}

impl Storage for DiskStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self.partition.get(key)? {
            Some(bytes) => {
                debug!("Storage HIT for key: {key}");
                Ok(Some(String::from_utf8(bytes.to_vec())?))
            }
            None => {
                debug!("Storage MISS for key: {key}");
                Ok(None)
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.partition.insert(key.as_bytes(), value.as_bytes())?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!("Storage PUT for key: {key}");
        Ok(())
    }
}
