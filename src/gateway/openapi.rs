//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::{BalanceData, HealthResponse};
use crate::gateway::types::{CreateAccountRequest, TransferRequest};
use crate::models::{Account, Customer, Transfer};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Banking API",
        version = "1.0.0",
        description = "Internal API for banking operations: accounts, balances, peer-to-peer transfers."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::create_account,
        crate::gateway::handlers::get_balance,
        crate::gateway::handlers::get_transfer_history,
        crate::gateway::handlers::create_transfer,
        crate::gateway::handlers::get_customer_accounts,
        crate::gateway::handlers::get_customer_transfers,
    ),
    components(schemas(
        Account,
        Customer,
        Transfer,
        CreateAccountRequest,
        TransferRequest,
        BalanceData,
        HealthResponse,
    )),
    tags(
        (name = "Accounts", description = "Account creation and queries"),
        (name = "Transfers", description = "Peer-to-peer transfers"),
        (name = "Customers", description = "Per-customer views"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["info"]["title"], "Banking API");
        assert!(json["paths"].get("/api/v1/transfers").is_some());
    }
}
