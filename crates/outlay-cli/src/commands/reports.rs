//! Report command implementations

use anyhow::Result;
use outlay_core::report;

use super::Stores;

pub fn cmd_summary(stores: &Stores) -> Result<()> {
    let expenses = stores.expenses.list();

    if expenses.is_empty() {
        println!("No expenses recorded yet. Add one with:");
        println!("  outlay add --amount 12.50 --category Food");
        return Ok(());
    }

    let summary = report::spending_summary(&expenses);

    println!();
    println!("📈 Spending by Category");
    println!("   ─────────────────────────────");
    for (category, total) in &summary.summary {
        println!("   {:<15} ${:>9.2}", category, total);
    }
    println!("   ─────────────────────────────");
    println!("   {:<15} ${:>9.2}", "Total", summary.total);
    println!("   {} expense(s)", summary.expense_count);

    Ok(())
}
