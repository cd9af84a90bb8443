use super::ui;
use crate::core::{Expense, ExpensePatch, ExpenseStore, Storage, format_currency};
use anyhow::{Result, bail};
use chrono::{Local, NaiveDate, Utc};

/// Fields for a new expense as entered by the user.
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub id: Option<String>,
    pub name: String,
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub category: String,
    pub notes: Option<String>,
}

impl ExpenseInput {
    /// Fills the id with the current Unix milliseconds and the date with today.
    pub fn into_expense(self) -> Expense {
        Expense {
            id: self
                .id
                .unwrap_or_else(|| Utc::now().timestamp_millis().to_string()),
            name: self.name,
            amount: self.amount,
            date: self
                .date
                .unwrap_or_else(|| Local::now().date_naive())
                .format("%Y-%m-%d")
                .to_string(),
            category: self.category,
            notes: self.notes,
        }
    }
}

/// Parses an amount argument, refusing NaN and infinities.
pub fn parse_amount(text: &str) -> Result<f64, String> {
    let amount: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("'{text}' is not a number"))?;
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(format!("'{text}' is not a finite amount"))
    }
}

fn describe(expense: &Expense) -> String {
    format!(
        "{} {} ({}, {})",
        expense.name,
        format_currency(Some(expense.amount), false),
        expense.category,
        expense.date
    )
}

pub fn add<S: Storage>(store: &ExpenseStore<S>, input: ExpenseInput) -> Result<String> {
    let expense = input.into_expense();
    let message = format!("Added expense {}: {}", expense.id, describe(&expense));
    store.add(expense)?;
    Ok(ui::style_text(&message, ui::StyleType::Success))
}

pub fn update<S: Storage>(store: &ExpenseStore<S>, id: &str, patch: ExpensePatch) -> Result<String> {
    if patch.is_empty() {
        bail!("Nothing to update for expense {id}; pass at least one field");
    }

    let new_id = patch.id.clone().unwrap_or_else(|| id.to_string());
    if !store.update(id, patch)? {
        return Ok(ui::style_text(
            &format!("No expense with id {id}"),
            ui::StyleType::Subtle,
        ));
    }

    let message = match store.get(&new_id)? {
        Some(expense) => format!("Updated expense {new_id}: {}", describe(&expense)),
        None => format!("Updated expense {new_id}"),
    };
    Ok(ui::style_text(&message, ui::StyleType::Success))
}

pub fn delete<S: Storage>(store: &ExpenseStore<S>, id: &str) -> Result<String> {
    if store.delete(id)? {
        Ok(ui::style_text(
            &format!("Deleted expense {id}"),
            ui::StyleType::Success,
        ))
    } else {
        Ok(ui::style_text(
            &format!("No expense with id {id}"),
            ui::StyleType::Subtle,
        ))
    }
}
