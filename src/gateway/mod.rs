//! HTTP gateway: routing, state, and server startup
//!
//! Control flow per request: handler → [`crate::service::BankingService`] →
//! [`crate::store::Store`], with results wrapped in the unified response
//! envelope from [`types::response`].

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use self::state::AppState;

/// Build the application router.
///
/// Separated from [`run`] so tests can drive the router in-process.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        // Accounts
        .route("/accounts", post(handlers::create_account))
        .route(
            "/accounts/{account_id}/balance",
            get(handlers::get_balance),
        )
        .route(
            "/accounts/{account_id}/transfers",
            get(handlers::get_transfer_history),
        )
        // Transfers
        .route("/transfers", post(handlers::create_transfer))
        // Customers
        .route(
            "/customers/{customer_id}/accounts",
            get(handlers::get_customer_accounts),
        )
        .route(
            "/customers/{customer_id}/transfers",
            get(handlers::get_customer_transfers),
        );

    Router::new()
        .nest("/api/v1", api_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Bind and serve the gateway until the process exits.
pub async fn run(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr} (port already in use?)"))?;

    tracing::info!("gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app).await.context("server error")
}
