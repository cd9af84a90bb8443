use super::ui;
use crate::core::{Expense, ExpenseStore, Storage, format_currency};
use anyhow::Result;
use comfy_table::Cell;

/// Renders expenses as a table with a grand total.
pub fn display_as_table(expenses: &[Expense], abbreviated: bool) -> String {
    if expenses.is_empty() {
        return ui::style_text("No expenses recorded yet.", ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("ID"),
        ui::header_cell("Date"),
        ui::header_cell("Name"),
        ui::header_cell("Category"),
        ui::header_cell("Amount"),
        ui::header_cell("Notes"),
    ]);

    for expense in expenses {
        table.add_row(vec![
            Cell::new(&expense.id),
            Cell::new(&expense.date),
            Cell::new(&expense.name),
            Cell::new(&expense.category),
            ui::amount_cell(expense.amount, abbreviated),
            ui::optional_text_cell(expense.notes.as_deref()),
        ]);
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();

    let mut output = format!("{}\n\n", ui::style_text("Expenses", ui::StyleType::Title));
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{} {}",
        ui::style_text(&format!("Total ({} items):", expenses.len()), ui::StyleType::TotalLabel),
        ui::style_text(
            &format_currency(Some(total), abbreviated),
            ui::StyleType::TotalValue
        )
    ));
    output
}

pub fn run<S: Storage>(store: &ExpenseStore<S>, abbreviated: bool) -> Result<String> {
    let expenses = store.list()?;
    Ok(display_as_table(&expenses, abbreviated))
}
