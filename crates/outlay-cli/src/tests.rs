//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use tempfile::TempDir;

use crate::commands::{self, truncate, Stores};

fn setup_test_stores() -> (Stores, TempDir) {
    let dir = TempDir::new().unwrap();
    let stores = commands::open_stores(dir.path()).unwrap();
    (stores, dir)
}

fn add_groceries(stores: &Stores) {
    commands::cmd_add(
        stores,
        46.25,
        "Food",
        Some("2024-01-15"),
        "Weekly groceries",
        &["groceries".to_string(), "weekly".to_string()],
    )
    .unwrap();
}

// ========== Init Command Tests ==========

#[test]
fn test_cmd_init_creates_data_files() {
    let dir = TempDir::new().unwrap();

    let result = commands::cmd_init(dir.path());
    assert!(result.is_ok());

    assert!(dir.path().join("expenses.csv").exists());
    assert!(dir.path().join("budgets.json").exists());
}

#[test]
fn test_cmd_init_is_idempotent() {
    let dir = TempDir::new().unwrap();

    commands::cmd_init(dir.path()).unwrap();
    let stores = commands::open_stores(dir.path()).unwrap();
    add_groceries(&stores);

    // Running init again must not wipe existing data
    commands::cmd_init(dir.path()).unwrap();
    let stores = commands::open_stores(dir.path()).unwrap();
    assert_eq!(stores.expenses.count(), 1);
}

// ========== Expense Command Tests ==========

#[test]
fn test_cmd_add() {
    let (stores, _dir) = setup_test_stores();

    add_groceries(&stores);

    let expense = stores.expenses.get(1).unwrap();
    assert_eq!(expense.amount, 46.25);
    assert_eq!(expense.category, "Food");
    assert_eq!(expense.tags, vec!["groceries", "weekly"]);
}

#[test]
fn test_cmd_add_defaults_to_today() {
    let (stores, _dir) = setup_test_stores();

    let result = commands::cmd_add(&stores, 3.10, "Food", None, "", &[]);
    assert!(result.is_ok());

    let expense = stores.expenses.get(1).unwrap();
    assert_eq!(expense.date, chrono::Local::now().date_naive());
}

#[test]
fn test_cmd_add_rejects_bad_date() {
    let (stores, _dir) = setup_test_stores();

    let result = commands::cmd_add(&stores, 5.0, "Food", Some("15/01/2024"), "", &[]);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("YYYY-MM-DD"));
    assert_eq!(stores.expenses.count(), 0);
}

#[test]
fn test_cmd_add_rejects_negative_amount() {
    let (stores, _dir) = setup_test_stores();

    let result = commands::cmd_add(&stores, -5.0, "Food", Some("2024-01-15"), "", &[]);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("non-negative"));
}

#[test]
fn test_cmd_list_empty() {
    let (stores, _dir) = setup_test_stores();
    let result = commands::cmd_list(&stores);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_list_with_expenses() {
    let (stores, _dir) = setup_test_stores();
    add_groceries(&stores);

    let result = commands::cmd_list(&stores);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_filter() {
    let (stores, _dir) = setup_test_stores();
    add_groceries(&stores);
    commands::cmd_add(
        &stores,
        12.0,
        "Transport",
        Some("2024-01-16"),
        "Bus pass",
        &["commute".to_string()],
    )
    .unwrap();

    assert!(commands::cmd_filter(&stores, Some("Food"), None).is_ok());
    assert!(commands::cmd_filter(&stores, None, Some("commute")).is_ok());
    assert!(commands::cmd_filter(&stores, Some("Food"), Some("weekly")).is_ok());
    // No filters falls back to the full listing
    assert!(commands::cmd_filter(&stores, None, None).is_ok());
}

#[test]
fn test_cmd_list_multibyte_description() {
    let (stores, _dir) = setup_test_stores();

    // 30 chars but 60 bytes; printing must not split a character
    let description = "é".repeat(30);
    commands::cmd_add(
        &stores,
        4.50,
        "Food",
        Some("2024-01-15"),
        &description,
        &[],
    )
    .unwrap();

    assert!(commands::cmd_list(&stores).is_ok());
    assert_eq!(stores.expenses.get(1).unwrap().description, description);
}

#[test]
fn test_cmd_delete() {
    let (stores, _dir) = setup_test_stores();
    add_groceries(&stores);

    let result = commands::cmd_delete(&stores, 1);
    assert!(result.is_ok());
    assert_eq!(stores.expenses.count(), 0);
}

#[test]
fn test_cmd_delete_missing() {
    let (stores, _dir) = setup_test_stores();

    let result = commands::cmd_delete(&stores, 42);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
}

// ========== Budget Command Tests ==========

#[test]
fn test_cmd_budgets_list_empty() {
    let (stores, _dir) = setup_test_stores();
    let result = commands::cmd_budgets_list(&stores);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_budgets_set() {
    let (stores, _dir) = setup_test_stores();

    let result = commands::cmd_budgets_set(
        &stores,
        &["Food=500".to_string(), "Transport=150".to_string()],
    );
    assert!(result.is_ok());

    assert_eq!(stores.budgets.get("Food"), Some(500.0));
    assert_eq!(stores.budgets.get("Transport"), Some(150.0));
}

#[test]
fn test_cmd_budgets_set_rejects_malformed_entry() {
    let (stores, _dir) = setup_test_stores();

    let result = commands::cmd_budgets_set(&stores, &["Food".to_string()]);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("CATEGORY=LIMIT"));

    let result = commands::cmd_budgets_set(&stores, &["Food=lots".to_string()]);
    assert!(result.is_err());
    assert_eq!(stores.budgets.count(), 0);
}

#[test]
fn test_cmd_budgets_set_rejects_negative_limit() {
    let (stores, _dir) = setup_test_stores();

    let result = commands::cmd_budgets_set(&stores, &["Food=-10".to_string()]);
    assert!(result.is_err());
    assert_eq!(stores.budgets.count(), 0);
}

#[test]
fn test_cmd_budgets_status() {
    let (stores, _dir) = setup_test_stores();
    add_groceries(&stores);
    commands::cmd_budgets_set(&stores, &["Food=40".to_string()]).unwrap();

    let result = commands::cmd_budgets_status(&stores);
    assert!(result.is_ok());
}

// ========== Summary Command Tests ==========

#[test]
fn test_cmd_summary_empty() {
    let (stores, _dir) = setup_test_stores();
    let result = commands::cmd_summary(&stores);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_summary() {
    let (stores, _dir) = setup_test_stores();
    add_groceries(&stores);

    let result = commands::cmd_summary(&stores);
    assert!(result.is_ok());
}

// ========== Seed Command Tests ==========

#[test]
fn test_cmd_seed() {
    let (stores, _dir) = setup_test_stores();

    let result = commands::cmd_seed(&stores);
    assert!(result.is_ok());
    assert_eq!(stores.expenses.count(), 5);
    assert_eq!(stores.budgets.count(), 6);
}

#[test]
fn test_cmd_seed_refuses_non_empty_stores() {
    let (stores, _dir) = setup_test_stores();
    add_groceries(&stores);

    let result = commands::cmd_seed(&stores);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("refusing"));
}

// ========== Helper Tests ==========

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("a very long description", 10), "a very ...");
}

#[test]
fn test_truncate_multibyte_within_limit() {
    let s = "é".repeat(30);
    assert_eq!(truncate(&s, 40), s);
}

#[test]
fn test_truncate_multibyte_long_string() {
    let s = "é".repeat(50);
    assert_eq!(truncate(&s, 40), format!("{}...", "é".repeat(37)));
}
