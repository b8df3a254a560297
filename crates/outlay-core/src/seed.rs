//! Sample data for demos and first runs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::NewExpense;
use crate::store::{BudgetStore, ExpenseStore};

/// What `seed_sample_data` loaded
#[derive(Debug, Clone, Copy)]
pub struct SeedResult {
    pub expenses: usize,
    pub budgets: usize,
}

/// Starter budget limits for common categories.
pub fn default_budgets() -> BTreeMap<String, f64> {
    [
        ("Food", 100.0),
        ("Transport", 200.0),
        ("Entertainment", 150.0),
        ("Utilities", 300.0),
        ("Shopping", 200.0),
        ("Other", 250.0),
    ]
    .iter()
    .map(|(category, limit)| (category.to_string(), *limit))
    .collect()
}

fn sample_expense(
    amount: f64,
    category: &str,
    date: (i32, u32, u32),
    description: &str,
    tags: &[&str],
) -> NewExpense {
    NewExpense {
        amount,
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// A handful of realistic expenses for trying the tool out.
pub fn sample_expenses() -> Vec<NewExpense> {
    vec![
        sample_expense(
            12.50,
            "Food",
            (2025, 10, 20),
            "Lunch at cafe",
            &["lunch", "work"],
        ),
        sample_expense(
            45.00,
            "Transport",
            (2025, 10, 21),
            "Gas for car",
            &["car", "fuel"],
        ),
        sample_expense(
            25.99,
            "Entertainment",
            (2025, 10, 22),
            "Movie tickets",
            &["movies", "weekend"],
        ),
        sample_expense(
            8.75,
            "Food",
            (2025, 10, 23),
            "Coffee and pastry",
            &["coffee", "morning"],
        ),
        sample_expense(
            120.00,
            "Utilities",
            (2025, 10, 24),
            "Electric bill",
            &["bills", "monthly"],
        ),
    ]
}

/// Load the sample expenses and starter budgets into empty stores.
///
/// Refuses when either store already holds data, so sample records cannot
/// mix into real ones.
pub fn seed_sample_data(expenses: &ExpenseStore, budgets: &BudgetStore) -> Result<SeedResult> {
    if expenses.count() > 0 || budgets.count() > 0 {
        return Err(Error::validation(
            "Data directory already contains data; refusing to seed samples",
        ));
    }

    let samples = sample_expenses();
    let expense_count = samples.len();
    for sample in samples {
        expenses.create(sample)?;
    }

    let limits = default_budgets();
    let budget_count = limits.len();
    budgets.set_many(limits)?;

    info!(
        "Seeded {} sample expenses and {} budgets",
        expense_count, budget_count
    );
    Ok(SeedResult {
        expenses: expense_count,
        budgets: budget_count,
    })
}
