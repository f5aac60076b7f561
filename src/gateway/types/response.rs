//! Response envelope, API error type, and domain error mapping
//!
//! Every response, success or failure, is an [`ApiResponse`]:
//! `{status, data, message, error_code?, timestamp}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::BankingError;
use crate::validation::ValidationError;

/// Unified API response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// "success" or "failure"
    #[schema(example = "success")]
    pub status: String,
    /// Response data (absent on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable outcome description
    #[schema(example = "Transfer executed successfully")]
    pub message: String,
    /// Machine-readable error code (absent on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    /// Server time the response was produced
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Create a success envelope
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            message: message.into(),
            error_code: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a failure envelope
    pub fn failure(error_code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            status: "failure".to_string(),
            data: None,
            message: message.into(),
            error_code: Some(error_code),
            timestamp: Utc::now(),
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    // Client errors (1xxx)
    pub const VALIDATION_FAILED: i32 = 1001;
    pub const INSUFFICIENT_FUNDS: i32 = 1002;
    pub const SELF_TRANSFER: i32 = 1003;

    // Resource errors (4xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 4001;
    pub const CUSTOMER_NOT_FOUND: i32 = 4002;
}

/// Transport-level error: HTTP status plus failure envelope contents.
///
/// Handlers return `ApiResult<T>`; any `ApiError` renders as the unified
/// envelope with `status: "failure"`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// 422 with the violated constraint in the message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            error_codes::VALIDATION_FAILED,
            message,
        )
    }

    /// Convert into the error side of an [`ApiResult`]
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

/// Map domain errors to fixed statuses and public messages.
///
/// The identifier-bearing `Display` of [`BankingError`] is for logs only and
/// must not reach the wire.
impl From<BankingError> for ApiError {
    fn from(err: BankingError) -> Self {
        match err {
            BankingError::AccountNotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                error_codes::ACCOUNT_NOT_FOUND,
                "Account not found",
            ),
            BankingError::CustomerNotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                error_codes::CUSTOMER_NOT_FOUND,
                "Customer Id not found",
            ),
            BankingError::InsufficientFunds(_) => Self::new(
                StatusCode::BAD_REQUEST,
                error_codes::INSUFFICIENT_FUNDS,
                "Transfer cannot be completed. Insufficient funds",
            ),
            BankingError::SelfTransfer(_) => Self::new(
                StatusCode::BAD_REQUEST,
                error_codes::SELF_TRANSFER,
                "Transfer cannot be completed. Cannot transfer money to the same account",
            ),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ApiResponse::<()>::failure(self.code, self.message));
        (self.status, body).into_response()
    }
}

/// Handler result: status code plus success envelope, or an [`ApiError`]
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 OK success envelope
pub fn ok<T>(data: T, message: impl Into<String>) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data, message))))
}

/// 201 Created success envelope
pub fn created<T>(data: T, message: impl Into<String>) -> ApiResult<T> {
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(data, message)),
    ))
}
