//! Aggregated reporting handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::AppState;
use outlay_core::{report, DashboardSummary, SpendingSummary};

/// GET /dashboard/data - Headline numbers for the dashboard page
pub async fn dashboard_data(State(state): State<Arc<AppState>>) -> Json<DashboardSummary> {
    let expenses = state.expenses.list();
    let budgets = state.budgets.all();

    Json(report::dashboard_summary(&expenses, &budgets))
}

/// GET /expenses/summary/category - Spending totals grouped by category
pub async fn category_summary(State(state): State<Arc<AppState>>) -> Json<SpendingSummary> {
    let expenses = state.expenses.list();

    Json(report::spending_summary(&expenses))
}
