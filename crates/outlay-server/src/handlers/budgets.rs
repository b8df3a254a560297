//! Budget limit handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{AppError, AppState};
use outlay_core::{report, CategoryStatus};

/// GET /budgets - List all budget limits
pub async fn list_budgets(State(state): State<Arc<AppState>>) -> Json<BTreeMap<String, f64>> {
    Json(state.budgets.all())
}

/// POST /budgets/set - Set or update budget limits
///
/// Accepts a flat `{category: limit}` object. Existing categories are
/// overwritten, others are left alone; the full budget map is returned.
pub async fn set_budgets(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BTreeMap<String, f64>>, JsonRejection>,
) -> Result<Json<BTreeMap<String, f64>>, AppError> {
    let Json(entries) = payload.map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let budgets = state.budgets.set_many(entries)?;

    Ok(Json(budgets))
}

/// GET /budgets/status - Spending against each budgeted category
pub async fn budget_status(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryStatus>> {
    let expenses = state.expenses.list();
    let budgets = state.budgets.all();

    Json(report::budget_status(&expenses, &budgets))
}
