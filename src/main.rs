//! bankcore - Internal banking API
//!
//! Entry point: load config, initialize logging, build the seeded store and
//! the service on top of it, then serve the HTTP gateway.

use std::sync::Arc;

use bankcore::config::AppConfig;
use bankcore::gateway::{self, state::AppState};
use bankcore::logging::init_logging;
use bankcore::service::BankingService;
use bankcore::store::Store;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load_or_default(&env);
    let _guard = init_logging(&config);

    tracing::info!(env = %env, "starting banking API");

    let store = Arc::new(Store::seeded());
    let service = Arc::new(BankingService::new(store));
    let state = Arc::new(AppState::new(service));

    gateway::run(&config.gateway, state).await
}
