use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use bank_accounts::shell::config::Config;
use bank_accounts::shell::http;
use bank_accounts::shell::state::{AppState, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    // In-memory store for now
    let store = Arc::new(Store::new());
    let state = AppState::new(store, config.retry.clone());
    let app = http::app(state);

    tracing::info!(
        addr = %config.addr,
        max_attempts = config.retry.max_attempts(),
        "accounts API listening; GraphQL endpoint at /gql"
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
