//! Customer handlers (owned accounts, cross-account transfer history)

use std::sync::Arc;

use axum::extract::{Path, State};

use super::super::state::AppState;
use super::super::types::{ApiResponse, ApiResult, ok};
use crate::models::{Account, Transfer};

/// List all accounts owned by a customer
///
/// GET /api/v1/customers/{customer_id}/accounts
#[utoipa::path(
    get,
    path = "/api/v1/customers/{customer_id}/accounts",
    params(
        ("customer_id" = i64, Path, description = "Customer identifier")
    ),
    responses(
        (status = 200, description = "Accounts owned by the customer", body = ApiResponse<Vec<Account>>),
        (status = 404, description = "Customer not found")
    ),
    tag = "Customers"
)]
pub async fn get_customer_accounts(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<i64>,
) -> ApiResult<Vec<Account>> {
    let accounts = state.service.customer_accounts(customer_id)?;
    ok(accounts, "Accounts retrieved successfully")
}

/// Get the transfer history across all of a customer's accounts
///
/// GET /api/v1/customers/{customer_id}/transfers
#[utoipa::path(
    get,
    path = "/api/v1/customers/{customer_id}/transfers",
    params(
        ("customer_id" = i64, Path, description = "Customer identifier")
    ),
    responses(
        (status = 200, description = "Transfers touching any of the customer's accounts", body = ApiResponse<Vec<Transfer>>),
        (status = 404, description = "Customer not found")
    ),
    tag = "Customers"
)]
pub async fn get_customer_transfers(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<i64>,
) -> ApiResult<Vec<Transfer>> {
    let transfers = state.service.customer_transfers(customer_id)?;
    ok(transfers, "Transaction History retrieved successfully")
}
