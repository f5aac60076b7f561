//! Gateway types: API boundary enforcement
//!
//! ## Input
//! - [`StrictAmount`]: format-validated monetary input
//! - [`CreateAccountRequest`], [`TransferRequest`]: request DTOs
//! - [`ApiJson`]: extractor producing envelope-shaped 422s on bad bodies
//!
//! ## Output
//! - [`ApiResponse<T>`]: unified response envelope
//! - [`ApiError`] / [`ApiResult`]: transport error and handler result

pub mod money;
pub mod request;
pub mod response;

pub use money::StrictAmount;
pub use request::{ApiJson, CreateAccountRequest, TransferRequest};
pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};
