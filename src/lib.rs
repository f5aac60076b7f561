//! bankcore - Internal banking API
//!
//! Accounts, balances, peer-to-peer transfers, and transfer history over an
//! in-memory store.
//!
//! # Modules
//!
//! - [`models`] - Customer, Account, and Transfer types
//! - [`error`] - Domain error taxonomy
//! - [`validation`] - Amount and account-id input validation
//! - [`store`] - In-memory store (single mutation lock)
//! - [`service`] - Business rules on top of the store
//! - [`gateway`] - HTTP API (axum), response envelope, OpenAPI docs
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing initialization

pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;

// Convenient re-exports at crate root
pub use error::BankingError;
pub use models::{Account, Customer, Transfer};
pub use service::BankingService;
pub use store::Store;
