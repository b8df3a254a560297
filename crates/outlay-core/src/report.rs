//! Spending reports and budget analytics
//!
//! Pure functions over expense and budget snapshots. Callers pass the data
//! in; nothing here touches the stores or the filesystem, which keeps the
//! arithmetic trivially testable.

use std::collections::BTreeMap;

use crate::models::{CategoryStatus, DashboardSummary, Expense, SpendingSummary};

/// Sum of amounts per category.
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Budget consumption per budgeted category, in category order.
///
/// Every budgeted category gets an entry, including those with no spending
/// (`spent = 0`). Categories with spending but no budget are not listed.
/// `remaining` goes negative once a budget is blown.
pub fn budget_status(
    expenses: &[Expense],
    budgets: &BTreeMap<String, f64>,
) -> Vec<CategoryStatus> {
    let totals = totals_by_category(expenses);

    budgets
        .iter()
        .map(|(category, &limit)| {
            let spent = totals.get(category).copied().unwrap_or(0.0);
            let percent_used = if limit > 0.0 { spent / limit * 100.0 } else { 0.0 };
            CategoryStatus {
                category: category.clone(),
                limit,
                spent,
                remaining: limit - spent,
                over_budget: spent > limit,
                percent_used,
            }
        })
        .collect()
}

/// Headline numbers for the dashboard.
pub fn dashboard_summary(
    expenses: &[Expense],
    budgets: &BTreeMap<String, f64>,
) -> DashboardSummary {
    let over_budget_count = budget_status(expenses, budgets)
        .iter()
        .filter(|status| status.over_budget)
        .count();

    DashboardSummary {
        total_spent: expenses.iter().map(|e| e.amount).sum(),
        expense_count: expenses.len(),
        over_budget_count,
        by_category: totals_by_category(expenses),
    }
}

/// Category totals plus overall count and total.
pub fn spending_summary(expenses: &[Expense]) -> SpendingSummary {
    SpendingSummary {
        summary: totals_by_category(expenses),
        total: expenses.iter().map(|e| e.amount).sum(),
        expense_count: expenses.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(amount: f64, category: &str) -> Expense {
        Expense {
            id: 1,
            amount,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    fn budgets(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(category, limit)| (category.to_string(), *limit))
            .collect()
    }

    #[test]
    fn test_totals_by_category() {
        let expenses = vec![
            expense(10.0, "Food"),
            expense(5.5, "Food"),
            expense(20.0, "Transport"),
        ];
        let totals = totals_by_category(&expenses);

        assert_eq!(totals.len(), 2);
        assert!((totals["Food"] - 15.5).abs() < 1e-9);
        assert!((totals["Transport"] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_empty() {
        assert!(totals_by_category(&[]).is_empty());
    }

    #[test]
    fn test_budget_status_worked_example() {
        let expenses = vec![expense(46.25, "Food")];
        let status = budget_status(&expenses, &budgets(&[("Food", 500.0)]));

        assert_eq!(status.len(), 1);
        let food = &status[0];
        assert_eq!(food.category, "Food");
        assert_eq!(food.limit, 500.0);
        assert_eq!(food.spent, 46.25);
        assert_eq!(food.remaining, 453.75);
        assert!(!food.over_budget);
        assert!((food.percent_used - 9.25).abs() < 1e-9);
    }

    #[test]
    fn test_budget_status_over_budget() {
        let expenses = vec![expense(46.25, "Food")];
        let status = budget_status(&expenses, &budgets(&[("Food", 40.0)]));

        let food = &status[0];
        assert!(food.over_budget);
        assert_eq!(food.remaining, -6.25);
    }

    #[test]
    fn test_budget_status_at_limit_is_not_over() {
        let expenses = vec![expense(40.0, "Food")];
        let status = budget_status(&expenses, &budgets(&[("Food", 40.0)]));

        assert!(!status[0].over_budget);
        assert_eq!(status[0].remaining, 0.0);
        assert!((status[0].percent_used - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_status_includes_unspent_categories() {
        let status = budget_status(&[], &budgets(&[("Food", 100.0)]));

        assert_eq!(status.len(), 1);
        assert_eq!(status[0].spent, 0.0);
        assert_eq!(status[0].remaining, 100.0);
        assert_eq!(status[0].percent_used, 0.0);
        assert!(!status[0].over_budget);
    }

    #[test]
    fn test_budget_status_skips_unbudgeted_spending() {
        let expenses = vec![expense(10.0, "Food"), expense(99.0, "Surprise")];
        let status = budget_status(&expenses, &budgets(&[("Food", 100.0)]));

        assert_eq!(status.len(), 1);
        assert_eq!(status[0].category, "Food");
    }

    #[test]
    fn test_budget_status_zero_limit() {
        let expenses = vec![expense(5.0, "Food")];
        let status = budget_status(&expenses, &budgets(&[("Food", 0.0)]));

        assert_eq!(status[0].percent_used, 0.0);
        assert!(status[0].over_budget);
        assert_eq!(status[0].remaining, -5.0);
    }

    #[test]
    fn test_budget_status_order_is_deterministic() {
        let status = budget_status(
            &[],
            &budgets(&[("Transport", 1.0), ("Food", 1.0), ("Rent", 1.0)]),
        );
        let categories: Vec<&str> = status.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["Food", "Rent", "Transport"]);
    }

    #[test]
    fn test_dashboard_summary() {
        let expenses = vec![
            expense(46.25, "Food"),
            expense(10.0, "Transport"),
            expense(3.75, "Food"),
        ];
        let budgets = budgets(&[("Food", 40.0), ("Transport", 100.0)]);
        let summary = dashboard_summary(&expenses, &budgets);

        assert!((summary.total_spent - 60.0).abs() < 1e-9);
        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.over_budget_count, 1);
        assert!((summary.by_category["Food"] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_dashboard_summary_empty() {
        let summary = dashboard_summary(&[], &BTreeMap::new());
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.expense_count, 0);
        assert_eq!(summary.over_budget_count, 0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_status_spent_sums_match_dashboard_totals() {
        let expenses = vec![
            expense(10.0, "Food"),
            expense(20.0, "Transport"),
            expense(30.0, "Unbudgeted"),
        ];
        let budgets = budgets(&[("Food", 50.0), ("Transport", 50.0)]);

        let status = budget_status(&expenses, &budgets);
        let summary = dashboard_summary(&expenses, &budgets);

        let status_spent: f64 = status.iter().map(|s| s.spent).sum();
        let budgeted_total: f64 = summary
            .by_category
            .iter()
            .filter(|(category, _)| budgets.contains_key(category.as_str()))
            .map(|(_, amount)| amount)
            .sum();
        assert!((status_spent - budgeted_total).abs() < 1e-9);
    }

    #[test]
    fn test_spending_summary() {
        let expenses = vec![expense(12.5, "Food"), expense(45.0, "Transport")];
        let summary = spending_summary(&expenses);

        assert!((summary.total - 57.5).abs() < 1e-9);
        assert_eq!(summary.expense_count, 2);
        assert!((summary.summary["Food"] - 12.5).abs() < 1e-9);
    }
}
