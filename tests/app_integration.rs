use expense_tracker::cli::expense::ExpenseInput;
use expense_tracker::core::{ExpensePatch, ExpenseStore, STORAGE_KEY, Storage};
use expense_tracker::store::disk::DiskStorage;
use expense_tracker::{AppCommand, execute};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::info;

mod test_utils {
    use super::*;

    /// Writes a disk-backed config whose data lives under `dir`.
    pub fn write_config(dir: &Path, abbreviate: bool) -> PathBuf {
        let config_path = dir.join("config.yaml");
        let data_path = dir.join("data");
        let content = format!(
            "storage: disk\ndata_path: \"{}\"\nabbreviate: {abbreviate}\n",
            data_path.display()
        );
        fs::write(&config_path, content).expect("Failed to write config file");
        config_path
    }

    pub fn input(id: &str, name: &str, amount: f64, category: &str) -> ExpenseInput {
        ExpenseInput {
            id: Some(id.to_string()),
            name: name.to_string(),
            amount,
            date: chrono::NaiveDate::from_ymd_opt(2025, 4, 13),
            category: category.to_string(),
            notes: None,
        }
    }

    pub fn run(command: AppCommand, config_path: &Path) -> String {
        let output = execute(command, config_path.to_str()).expect("Command failed");
        console::strip_ansi_codes(&output).to_string()
    }
}

#[test_log::test]
fn test_full_app_flow_on_disk() {
    let temp = TempDir::new().unwrap();
    let config_path = test_utils::write_config(temp.path(), false);

    let out = test_utils::run(AppCommand::List { abbreviate: false }, &config_path);
    assert_eq!(out, "No expenses recorded yet.");

    test_utils::run(
        AppCommand::Add(test_utils::input("1", "Groceries", 82.4, "food")),
        &config_path,
    );
    test_utils::run(
        AppCommand::Add(test_utils::input("2", "Laptop", 1500.0, "tech")),
        &config_path,
    );

    let out = test_utils::run(
        AppCommand::Update {
            id: "1".to_string(),
            patch: ExpensePatch {
                notes: Some("weekly shop".to_string()),
                ..Default::default()
            },
        },
        &config_path,
    );
    info!(%out, "Update output");
    assert!(out.starts_with("Updated expense 1"));

    let out = test_utils::run(AppCommand::List { abbreviate: false }, &config_path);
    assert!(out.contains("Groceries"));
    assert!(out.contains("weekly shop"));
    assert!(out.contains("1500.00"));
    assert!(out.contains("Total (2 items): 1582.40"));

    let out = test_utils::run(AppCommand::List { abbreviate: true }, &config_path);
    assert!(out.contains("1.5K"));
    assert!(out.contains("Total (2 items): 1.6K"));

    let out = test_utils::run(AppCommand::Delete { id: "2".to_string() }, &config_path);
    assert_eq!(out, "Deleted expense 2");

    // The persisted blob keeps exact field names
    let storage = DiskStorage::open(&temp.path().join("data").join("store")).unwrap();
    let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "1",
            "name": "Groceries",
            "amount": 82.4,
            "date": "2025-04-13",
            "category": "food",
            "notes": "weekly shop"
        }])
    );
}

#[test_log::test]
fn test_config_abbreviate_is_default_display() {
    let temp = TempDir::new().unwrap();
    let config_path = test_utils::write_config(temp.path(), true);

    test_utils::run(
        AppCommand::Add(test_utils::input("1", "Car", 2_000_000.0, "transport")),
        &config_path,
    );

    let out = test_utils::run(AppCommand::List { abbreviate: false }, &config_path);
    assert!(out.contains("Total (1 items): 2M"));
}

#[test_log::test]
fn test_unknown_id_leaves_store_untouched() {
    let temp = TempDir::new().unwrap();
    let config_path = test_utils::write_config(temp.path(), false);
    test_utils::run(
        AppCommand::Add(test_utils::input("1", "Coffee", 3.5, "food")),
        &config_path,
    );

    let read_raw = || {
        let storage = DiskStorage::open(&temp.path().join("data").join("store")).unwrap();
        storage.get_item(STORAGE_KEY).unwrap()
    };
    let before = read_raw();

    let out = test_utils::run(
        AppCommand::Update {
            id: "404".to_string(),
            patch: ExpensePatch {
                amount: Some(1.0),
                ..Default::default()
            },
        },
        &config_path,
    );
    assert_eq!(out, "No expense with id 404");

    let out = test_utils::run(AppCommand::Delete { id: "404".to_string() }, &config_path);
    assert_eq!(out, "No expense with id 404");

    assert_eq!(read_raw(), before);
}

#[test_log::test]
fn test_corrupt_data_fails_loudly() {
    let temp = TempDir::new().unwrap();
    let config_path = test_utils::write_config(temp.path(), false);
    {
        let storage = DiskStorage::open(&temp.path().join("data").join("store")).unwrap();
        storage.set_item(STORAGE_KEY, "[{\"id\": 1").unwrap();
    }

    let result = execute(AppCommand::List { abbreviate: false }, config_path.to_str());
    let err = result.expect_err("Corrupt data should not list as empty");
    assert!(err.to_string().contains("malformed expense data"));
}

#[test_log::test]
fn test_missing_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.yaml");

    let result = execute(AppCommand::List { abbreviate: false }, missing.to_str());
    assert!(result.is_err());
}

#[test_log::test]
fn test_memory_storage_via_store_api() {
    let store = ExpenseStore::new(expense_tracker::store::memory::MemoryStorage::new());
    let expenses: Vec<_> = (0..5)
        .map(|i| test_utils::input(&i.to_string(), "Snack", 1.0 + i as f64, "food").into_expense())
        .collect();
    for expense in &expenses {
        store.add(expense.clone()).unwrap();
    }
    assert_eq!(store.list().unwrap(), expenses);

    store.save(&expenses[..2]).unwrap();
    assert_eq!(store.list().unwrap(), &expenses[..2]);
}
