//! Shared utilities plus the init and seed commands

use std::path::Path;

use anyhow::{Context, Result};
use outlay_core::{seed_sample_data, BudgetStore, ExpenseStore, BUDGETS_FILE, EXPENSES_FILE};

/// Both stores, opened from the same data directory
pub struct Stores {
    pub expenses: ExpenseStore,
    pub budgets: BudgetStore,
}

/// Open the stores inside the data directory, creating files as needed
pub fn open_stores(data_dir: &Path) -> Result<Stores> {
    let expenses =
        ExpenseStore::open(data_dir.join(EXPENSES_FILE)).context("Failed to open expense store")?;
    let budgets =
        BudgetStore::open(data_dir.join(BUDGETS_FILE)).context("Failed to open budget store")?;
    Ok(Stores { expenses, budgets })
}

pub fn cmd_init(data_dir: &Path) -> Result<()> {
    println!("🔧 Initializing data files in {}...", data_dir.display());

    let stores = open_stores(data_dir)?;

    println!(
        "   {} ({} expenses)",
        EXPENSES_FILE,
        stores.expenses.count()
    );
    println!("   {} ({} budgets)", BUDGETS_FILE, stores.budgets.count());
    println!("✅ Data files ready!");
    println!();
    println!("Next steps:");
    println!("  1. Record an expense: outlay add --amount 12.50 --category Food");
    println!("  2. Start the dashboard: outlay serve");

    Ok(())
}

pub fn cmd_seed(stores: &Stores) -> Result<()> {
    println!("🌱 Seeding sample data...");

    let result = seed_sample_data(&stores.expenses, &stores.budgets)?;

    println!("   Expenses added: {}", result.expenses);
    println!("   Budgets set: {}", result.budgets);
    println!("✅ Sample data loaded. Try 'outlay list' or 'outlay budgets status'.");

    Ok(())
}
