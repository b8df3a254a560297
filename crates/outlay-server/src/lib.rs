//! Outlay Web Server
//!
//! REST API and dashboard for the expense tracker. Routes are served by
//! axum with the stores shared behind [`AppState`]; the dashboard is a
//! single static page that polls the JSON endpoints.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use outlay_core::{BudgetStore, ExpenseStore};

mod handlers;


/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = allow any origin)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    pub expenses: ExpenseStore,
    pub budgets: BudgetStore,
}

/// Create the router with all routes configured
pub fn create_router(
    expenses: ExpenseStore,
    budgets: BudgetStore,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> Router {
    let state = Arc::new(AppState { expenses, budgets });

    let mut app = Router::new()
        .route("/", get(handlers::index))
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route("/expenses/filter", get(handlers::filter_expenses))
        .route(
            "/expenses/summary/category",
            get(handlers::category_summary),
        )
        .route(
            "/expenses/:id",
            get(handlers::get_expense)
                .put(handlers::update_expense)
                .delete(handlers::delete_expense),
        )
        .route("/budgets", get(handlers::list_budgets))
        .route("/budgets/set", post(handlers::set_budgets))
        .route("/budgets/status", get(handlers::budget_status))
        .route("/dashboard", get(handlers::dashboard_page))
        .route("/dashboard/data", get(handlers::dashboard_data))
        .with_state(state);

    // Serve extra static files alongside the built-in dashboard
    if let Some(dir) = static_dir {
        info!("Serving static files from {}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    // Configure CORS based on allowed origins
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    };

    app.layer(TraceLayer::new_for_http()).layer(cors)
}

/// Start the server with default configuration
pub async fn serve(
    expenses: ExpenseStore,
    budgets: BudgetStore,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
) -> anyhow::Result<()> {
    serve_with_config(
        expenses,
        budgets,
        host,
        port,
        static_dir,
        ServerConfig::default(),
    )
    .await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    expenses: ExpenseStore,
    budgets: BudgetStore,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let app = create_router(expenses, budgets, static_dir, config);

    let addr = format!("{}:{}", host, port);
    info!("Starting server at http://{}", addr);
    info!("Dashboard available at http://{}/dashboard", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ========== Error Handling ==========

/// Application error type that converts to HTTP responses
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
            internal: None,
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.to_string(),
            internal: None,
        }
    }

    pub fn internal(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(err) = &self.internal {
            error!("Internal error: {:?}", err);
        }
        let body = Json(serde_json::json!({
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}

impl From<outlay_core::Error> for AppError {
    fn from(err: outlay_core::Error) -> Self {
        match err {
            outlay_core::Error::Validation(message) => Self {
                status: StatusCode::BAD_REQUEST,
                message,
                internal: None,
            },
            outlay_core::Error::NotFound(message) => Self {
                status: StatusCode::NOT_FOUND,
                message,
                internal: None,
            },
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal error occurred".to_string(),
                internal: Some(other.into()),
            },
        }
    }
}
