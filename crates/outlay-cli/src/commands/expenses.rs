//! Expense command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;
use outlay_core::{Expense, ExpenseFilter, NewExpense};

use super::{truncate, Stores};

fn print_expense(expense: &Expense) {
    let tags = if expense.tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", expense.tags.join(", "))
    };
    println!(
        "   [{}] {} │ {:>9} │ {:<14} │ {}{}",
        expense.id,
        expense.date,
        format!("${:.2}", expense.amount),
        expense.category,
        truncate(&expense.description, 40),
        tags
    );
}

pub fn cmd_add(
    stores: &Stores,
    amount: f64,
    category: &str,
    date: Option<&str>,
    description: &str,
    tags: &[String],
) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid date format (use YYYY-MM-DD)")?,
        None => chrono::Local::now().date_naive(),
    };

    let expense = stores.expenses.create(NewExpense {
        amount,
        category: category.to_string(),
        date,
        description: description.to_string(),
        tags: tags.to_vec(),
    })?;

    println!("✅ Recorded expense {}:", expense.id);
    print_expense(&expense);

    Ok(())
}

pub fn cmd_list(stores: &Stores) -> Result<()> {
    let expenses = stores.expenses.list();

    if expenses.is_empty() {
        println!("No expenses recorded yet. Add one with:");
        println!("  outlay add --amount 12.50 --category Food --description \"Lunch\"");
        return Ok(());
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();

    println!();
    println!("💸 Expenses ({} total)", expenses.len());
    println!("   ─────────────────────────────────────────────────────────────");
    for expense in &expenses {
        print_expense(expense);
    }
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total: ${:.2}", total);

    Ok(())
}

pub fn cmd_filter(stores: &Stores, category: Option<&str>, tag: Option<&str>) -> Result<()> {
    if category.is_none() && tag.is_none() {
        println!("No filters provided; showing all expenses.");
        return cmd_list(stores);
    }

    let filter = ExpenseFilter {
        category: category.map(str::to_string),
        tag: tag.map(str::to_string),
    };
    let matches = stores.expenses.filter(&filter);

    if matches.is_empty() {
        println!("No expenses match the filter.");
        return Ok(());
    }

    println!();
    println!("🔎 Matching Expenses ({})", matches.len());
    println!("   ─────────────────────────────────────────────────────────────");
    for expense in &matches {
        print_expense(expense);
    }

    Ok(())
}

pub fn cmd_delete(stores: &Stores, id: i64) -> Result<()> {
    // Fetch first so the deleted record can be echoed back
    let expense = stores.expenses.get(id)?;
    stores.expenses.delete(id)?;

    println!("✅ Deleted expense {}:", id);
    print_expense(&expense);

    Ok(())
}
