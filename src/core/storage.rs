//! Key-value storage abstraction

use super::error::Result;

/// A synchronous slot store: string keys mapped to string values.
///
/// Implementations hold process-wide state. Callers doing read-modify-write
/// cycles get no isolation from each other.
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the slot was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the slot under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}
