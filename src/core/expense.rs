//! Expense record and partial updates

use serde::{Deserialize, Serialize};

/// A single dated expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Caller supplied, conventionally a stringified timestamp.
    pub id: String,
    pub name: String,
    /// Decimal dollars, any sign.
    pub amount: f64,
    /// ISO calendar date, e.g. `2025-04-13`.
    pub date: String,
    /// Opaque category identifier, e.g. `food`.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields to overwrite on an existing [`Expense`].
///
/// A `None` field is left untouched. `Some` always wins, even for an empty
/// string or a zero amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpensePatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow field-by-field overwrite of `expense`.
    pub fn apply_to(self, expense: &mut Expense) {
        if let Some(id) = self.id {
            expense.id = id;
        }
        if let Some(name) = self.name {
            expense.name = name;
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(notes) = self.notes {
            expense.notes = Some(notes);
        }
    }
}
