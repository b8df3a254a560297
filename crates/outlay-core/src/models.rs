//! Domain models for outlay

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique positive id, assigned by the store
    pub id: i64,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    /// Labels attached to the expense; duplicates are dropped on write
    pub tags: Vec<String>,
}

impl Expense {
    /// Whether `tag` is attached to this expense (case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Payload for creating an expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update for an expense; only present fields replace stored values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Criteria for listing a subset of expenses. All present criteria must
/// match (AND semantics); an empty filter matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub tag: Option<String>,
}

impl ExpenseFilter {
    /// Exact, case-sensitive match against a record.
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(ref category) = self.category {
            if &expense.category != category {
                return false;
            }
        }
        if let Some(ref tag) = self.tag {
            if !expense.has_tag(tag) {
                return false;
            }
        }
        true
    }
}

/// Budget consumption for one budgeted category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStatus {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    /// `limit - spent`; negative when overspent
    pub remaining: f64,
    pub over_budget: bool,
    /// Percentage of the limit consumed; 0 when the limit itself is 0
    pub percent_used: f64,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_spent: f64,
    pub expense_count: usize,
    pub over_budget_count: usize,
    pub by_category: BTreeMap<String, f64>,
}

/// Category totals in the shape of the spending summary endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpendingSummary {
    pub summary: BTreeMap<String, f64>,
    pub total: f64,
    pub expense_count: usize,
}
