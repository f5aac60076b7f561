//! HTTP request handlers

pub mod account;
pub mod customer;
pub mod health;
pub mod transfer;

pub use account::{BalanceData, create_account, get_balance, get_transfer_history};
pub use customer::{get_customer_accounts, get_customer_transfers};
pub use health::{HealthResponse, health_check};
pub use transfer::create_transfer;

// Re-export the `__path_*` structs generated by `#[utoipa::path]` so the
// `OpenApi` derive can resolve them at `crate::gateway::handlers::__path_*`.
pub use account::{__path_create_account, __path_get_balance, __path_get_transfer_history};
pub use customer::{__path_get_customer_accounts, __path_get_customer_transfers};
pub use health::__path_health_check;
pub use transfer::__path_create_transfer;
