//! Core expense data layer

pub mod config;
pub mod error;
pub mod expense;
pub mod expense_store;
pub mod format;
pub mod log;
pub mod storage;

// Re-export main types for cleaner imports
pub use error::StoreError;
pub use expense::{Expense, ExpensePatch};
pub use expense_store::{ExpenseStore, STORAGE_KEY};
pub use format::format_currency;
pub use storage::Storage;
