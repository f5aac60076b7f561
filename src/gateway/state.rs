use std::sync::Arc;

use crate::service::BankingService;

/// Shared gateway application state.
///
/// The service (and through it the store) is constructed in `main` and
/// injected here; handlers reach it via the axum `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BankingService>,
}

impl AppState {
    pub fn new(service: Arc<BankingService>) -> Self {
        Self { service }
    }
}
