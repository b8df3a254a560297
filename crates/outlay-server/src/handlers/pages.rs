//! Built-in pages: API index and the dashboard

use axum::{response::Html, Json};

/// Dashboard page, compiled into the binary so the server needs no asset
/// directory to render it.
const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

/// GET / - Service metadata and endpoint listing
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Outlay Expense Tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "expenses": "/expenses",
            "filter": "/expenses/filter?category=&tag=",
            "category_summary": "/expenses/summary/category",
            "budgets": "/budgets",
            "budget_status": "/budgets/status",
            "dashboard": "/dashboard",
            "dashboard_data": "/dashboard/data",
        },
    }))
}

/// GET /dashboard - Dashboard page
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
