//! Expense CRUD and filtering handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use outlay_core::{Expense, ExpenseFilter, ExpensePatch, NewExpense};

/// GET /expenses - List all expenses
pub async fn list_expenses(State(state): State<Arc<AppState>>) -> Json<Vec<Expense>> {
    Json(state.expenses.list())
}

/// POST /expenses - Record a new expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewExpense>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), AppError> {
    let Json(req) = payload.map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let expense = state.expenses.create(req)?;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /expenses/:id - Get a single expense
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Expense>, AppError> {
    let expense = state.expenses.get(id)?;

    Ok(Json(expense))
}

/// PUT /expenses/:id - Update fields of an existing expense
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<ExpensePatch>, JsonRejection>,
) -> Result<Json<Expense>, AppError> {
    let Json(patch) = payload.map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let expense = state.expenses.update(id, patch)?;

    Ok(Json(expense))
}

/// DELETE /expenses/:id - Delete an expense
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.expenses.delete(id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Query parameters for filtering expenses
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    /// Exact category match
    pub category: Option<String>,
    /// Tag the expense must carry
    pub tag: Option<String>,
}

/// GET /expenses/filter - Filter expenses by category and/or tag
pub async fn filter_expenses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterQuery>,
) -> Json<Vec<Expense>> {
    let filter = ExpenseFilter {
        category: params.category,
        tag: params.tag,
    };

    Json(state.expenses.filter(&filter))
}
