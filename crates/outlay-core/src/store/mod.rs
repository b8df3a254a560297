//! Flat-file stores
//!
//! This module is organized by backing file:
//! - `expenses` - CSV-backed expense store (`expenses.csv`)
//! - `budgets` - JSON-backed budget store (`budgets.json`)
//!
//! Each store owns the authoritative in-memory state behind a clone-able
//! handle. Mutating operations rewrite the complete backing file (temp
//! file plus rename) before they return, so the file is always a parseable
//! copy of the state the caller just observed.

mod budgets;
mod expenses;

pub use budgets::BudgetStore;
pub use expenses::ExpenseStore;

/// Default file name for the expense CSV inside a data directory.
pub const EXPENSES_FILE: &str = "expenses.csv";

/// Default file name for the budget JSON inside a data directory.
pub const BUDGETS_FILE: &str = "budgets.json";
