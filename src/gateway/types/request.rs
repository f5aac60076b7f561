//! Request DTOs and the envelope-aware JSON extractor

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use super::money::StrictAmount;
use super::response::ApiError;

/// Custom deserializer for non-empty strings
fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("string cannot be empty"));
    }
    Ok(s)
}

/// Body of `POST /api/v1/accounts`
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    pub customer_id: i64,
    /// Opening balance - format validated by StrictAmount
    #[schema(value_type = String, example = "100.50")]
    pub initial_deposit: StrictAmount,
}

/// Body of `POST /api/v1/transfers`
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferRequest {
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    #[schema(example = "acc1-1234")]
    pub from_account_id: String,
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    #[schema(example = "acc2-5678")]
    pub to_account_id: String,
    /// Amount to move - format validated by StrictAmount
    #[schema(value_type = String, example = "100.00")]
    pub transfer_amount: StrictAmount,
}

/// JSON extractor whose rejection is the unified failure envelope.
///
/// With the stock `Json` extractor a malformed body surfaces as a plain-text
/// axum rejection; this wrapper turns it into a 422 `ApiError` so validation
/// failures share the response shape of every other error.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::validation(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_transfer_request_deserializes_string_and_number_amounts() {
        let req: TransferRequest = serde_json::from_str(
            r#"{"from_account_id":"acc1-1234","to_account_id":"acc2-5678","transfer_amount":"100.00"}"#,
        )
        .unwrap();
        assert_eq!(*req.transfer_amount, Decimal::from_str("100.00").unwrap());

        let req: TransferRequest = serde_json::from_str(
            r#"{"from_account_id":"acc1-1234","to_account_id":"acc2-5678","transfer_amount":100.5}"#,
        )
        .unwrap();
        assert_eq!(*req.transfer_amount, Decimal::from_str("100.5").unwrap());
    }

    #[test]
    fn test_transfer_request_rejects_empty_account_id() {
        let result: Result<TransferRequest, _> = serde_json::from_str(
            r#"{"from_account_id":"","to_account_id":"acc2-5678","transfer_amount":"1.00"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_create_account_request_requires_fields() {
        let result: Result<CreateAccountRequest, _> =
            serde_json::from_str(r#"{"customer_id":1}"#);
        assert!(result.is_err());
    }
}
