use super::error::{Result, StoreError};
use super::expense::{Expense, ExpensePatch};
use super::storage::Storage;
use tracing::debug;

/// Slot holding the serialized expense collection.
pub const STORAGE_KEY: &str = "expense-tracker-data";

/// CRUD over the full expense collection kept in a single storage slot.
///
/// Every mutation reads the whole collection, changes it in memory and
/// writes the whole collection back.
pub struct ExpenseStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ExpenseStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the persisted expenses, or an empty list if nothing was saved
    /// yet. An empty stored value counts as nothing saved.
    ///
    /// Corrupt data is an error, never an empty list.
    pub fn list(&self) -> Result<Vec<Expense>> {
        match self.storage.get_item(STORAGE_KEY)? {
            Some(raw) if !raw.is_empty() => {
                let expenses: Vec<Expense> =
                    serde_json::from_str(&raw).map_err(StoreError::Malformed)?;
                debug!(count = expenses.len(), "Read expenses");
                Ok(expenses)
            }
            _ => {
                debug!("No stored expenses");
                Ok(Vec::new())
            }
        }
    }

    /// First expense whose id equals `id`.
    pub fn get(&self, id: &str) -> Result<Option<Expense>> {
        Ok(self.list()?.into_iter().find(|e| e.id == id))
    }

    /// Appends `expense`. Duplicate ids are accepted.
    pub fn add(&self, expense: Expense) -> Result<()> {
        let mut expenses = self.list()?;
        debug!(id = %expense.id, "Adding expense");
        expenses.push(expense);
        self.save(&expenses)
    }

    /// Merges `patch` into the first expense with a matching id.
    ///
    /// Returns `false` without writing anything when no expense matches.
    pub fn update(&self, id: &str, patch: ExpensePatch) -> Result<bool> {
        let mut expenses = self.list()?;
        let Some(expense) = expenses.iter_mut().find(|e| e.id == id) else {
            debug!(id, "Update skipped, no such expense");
            return Ok(false);
        };
        patch.apply_to(expense);
        self.save(&expenses)?;
        debug!(id, "Updated expense");
        Ok(true)
    }

    /// Removes every expense with a matching id.
    ///
    /// Only writes when something was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let expenses = self.list()?;
        let before = expenses.len();
        let remaining: Vec<Expense> = expenses.into_iter().filter(|e| e.id != id).collect();
        if remaining.len() == before {
            debug!(id, "Delete skipped, no such expense");
            return Ok(false);
        }
        self.save(&remaining)?;
        debug!(id, removed = before - remaining.len(), "Deleted expense");
        Ok(true)
    }

    /// Overwrites the persisted collection with `expenses`.
    ///
    /// NaN and infinite amounts are rejected: JSON has no encoding for them and
    /// the collection would no longer read back.
    pub fn save(&self, expenses: &[Expense]) -> Result<()> {
        if let Some(bad) = expenses.iter().find(|e| !e.amount.is_finite()) {
            return Err(StoreError::NonFiniteAmount { id: bad.id.clone() });
        }
        let raw = serde_json::to_string(expenses).map_err(StoreError::Serialize)?;
        self.storage.set_item(STORAGE_KEY, &raw)?;
        debug!(count = expenses.len(), "Saved expenses");
        Ok(())
    }
}
