//! Account handlers (creation, balance, per-account transfer history)

use std::sync::Arc;

use axum::extract::{Path, State};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiJson, ApiResponse, ApiResult, CreateAccountRequest, created, ok};
use crate::models::{Account, Transfer};
use crate::validation::validate_amount;

/// Balance response data
#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceData {
    #[schema(example = "acc1-1234")]
    pub account_id: String,
    #[schema(value_type = String, example = "1000.00")]
    pub current_balance: Decimal,
}

/// Create a new account for a customer
///
/// POST /api/v1/accounts
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<Account>),
        (status = 404, description = "Customer not found"),
        (status = 422, description = "Invalid initial deposit")
    ),
    tag = "Accounts"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateAccountRequest>,
) -> ApiResult<Account> {
    let initial_deposit = validate_amount("initial_deposit", req.initial_deposit.inner())?;
    let account = state.service.create_account(req.customer_id, initial_deposit)?;
    created(account, "Account created successfully")
}

/// Get the current balance of an account
///
/// GET /api/v1/accounts/{account_id}/balance
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account_id}/balance",
    params(
        ("account_id" = String, Path, description = "Account identifier")
    ),
    responses(
        (status = 200, description = "Current balance", body = ApiResponse<BalanceData>),
        (status = 404, description = "Account not found")
    ),
    tag = "Accounts"
)]
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> ApiResult<BalanceData> {
    let current_balance = state.service.get_balance(&account_id)?;
    ok(
        BalanceData {
            account_id,
            current_balance,
        },
        "Account balance retrieved successfully",
    )
}

/// Get the transfer history of an account
///
/// GET /api/v1/accounts/{account_id}/transfers
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account_id}/transfers",
    params(
        ("account_id" = String, Path, description = "Account identifier")
    ),
    responses(
        (status = 200, description = "Transfers where the account is sender or receiver", body = ApiResponse<Vec<Transfer>>),
        (status = 404, description = "Account not found")
    ),
    tag = "Accounts"
)]
pub async fn get_transfer_history(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> ApiResult<Vec<Transfer>> {
    let transfers = state.service.get_transfers(&account_id)?;
    ok(transfers, "Transaction History retrieved successfully")
}
