//! Outlay Core Library
//!
//! Shared functionality for the outlay expense tracker:
//! - Flat-file stores (CSV-backed expenses, JSON-backed budgets)
//! - Expense validation and filtering
//! - Spending aggregation for budget status and the dashboard
//! - Sample data seeding for first runs

pub mod error;
pub mod models;
pub mod report;
pub mod seed;
pub mod store;

pub use error::{Error, Result};
pub use models::{
    CategoryStatus, DashboardSummary, Expense, ExpenseFilter, ExpensePatch, NewExpense,
    SpendingSummary,
};
pub use seed::{seed_sample_data, SeedResult};
pub use store::{BudgetStore, ExpenseStore, BUDGETS_FILE, EXPENSES_FILE};
