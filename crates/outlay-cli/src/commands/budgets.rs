//! Budget command implementations

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use outlay_core::report;

use super::Stores;

/// Parse CATEGORY=LIMIT pairs from the command line
fn parse_entries(entries: &[String]) -> Result<BTreeMap<String, f64>> {
    let mut parsed = BTreeMap::new();
    for entry in entries {
        let (category, limit) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid budget entry '{}' (use CATEGORY=LIMIT)", entry))?;
        let limit: f64 = limit
            .parse()
            .map_err(|_| anyhow!("Invalid limit in '{}' (use CATEGORY=LIMIT)", entry))?;
        parsed.insert(category.to_string(), limit);
    }
    Ok(parsed)
}

pub fn cmd_budgets_list(stores: &Stores) -> Result<()> {
    let budgets = stores.budgets.all();

    if budgets.is_empty() {
        println!("No budgets set. Set one with:");
        println!("  outlay budgets set Food=500");
        return Ok(());
    }

    println!();
    println!("💰 Budgets");
    println!("   ─────────────────────────────");
    for (category, limit) in &budgets {
        println!("   {:<15} ${:>8.2}", category, limit);
    }

    Ok(())
}

pub fn cmd_budgets_set(stores: &Stores, entries: &[String]) -> Result<()> {
    let parsed = parse_entries(entries)?;
    let count = parsed.len();

    let budgets = stores.budgets.set_many(parsed)?;

    println!("✅ Updated {} budget(s). Current limits:", count);
    for (category, limit) in &budgets {
        println!("   {:<15} ${:>8.2}", category, limit);
    }

    Ok(())
}

pub fn cmd_budgets_status(stores: &Stores) -> Result<()> {
    let budgets = stores.budgets.all();

    if budgets.is_empty() {
        println!("No budgets set. Set one with:");
        println!("  outlay budgets set Food=500");
        return Ok(());
    }

    let expenses = stores.expenses.list();
    let statuses = report::budget_status(&expenses, &budgets);

    println!();
    println!("📊 Budget Status");
    println!("   ──────────────────────────────────────────────────────");

    let mut over_count = 0;
    for status in &statuses {
        let marker = if status.over_budget {
            over_count += 1;
            "\x1b[31m⚠ OVER\x1b[0m"
        } else {
            "\x1b[32m✓ OK\x1b[0m"
        };
        println!(
            "   {:<15} ${:>8.2} of ${:>8.2} ({:>5.1}%)  {}",
            status.category, status.spent, status.limit, status.percent_used, marker
        );
    }

    println!();
    if over_count > 0 {
        println!("⚠️  {} budget(s) exceeded.", over_count);
    } else {
        println!("✅ All spending within budget.");
    }

    Ok(())
}
