//! Transfer execution handler

use std::sync::Arc;

use axum::extract::State;

use super::super::state::AppState;
use super::super::types::{ApiJson, ApiResponse, ApiResult, TransferRequest, ok};
use crate::models::Transfer;
use crate::validation::{validate_account_id, validate_amount};

/// Execute a transfer between two accounts
///
/// POST /api/v1/transfers
///
/// Input validation (amount range/precision, id length) happens here;
/// business rules (existence, self-transfer, funds) live in the service.
#[utoipa::path(
    post,
    path = "/api/v1/transfers",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer executed", body = ApiResponse<Transfer>),
        (status = 400, description = "Self transfer or insufficient funds"),
        (status = 404, description = "Account not found"),
        (status = 422, description = "Invalid transfer amount or account id")
    ),
    tag = "Transfers"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<TransferRequest>,
) -> ApiResult<Transfer> {
    validate_account_id("from_account_id", &req.from_account_id)?;
    validate_account_id("to_account_id", &req.to_account_id)?;
    let transfer_amount = validate_amount("transfer_amount", req.transfer_amount.inner())?;

    let transfer =
        state
            .service
            .execute_transfer(&req.from_account_id, &req.to_account_id, transfer_amount)?;
    ok(transfer, "Transfer executed successfully")
}
