use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::accounts::use_cases::change_balance::inbound::http as change_balance_http;
use crate::modules::accounts::use_cases::close_account::inbound::http as close_http;
use crate::modules::accounts::use_cases::open_account::inbound::http as open_http;
use crate::modules::accounts::use_cases::query_accounts::inbound::http as query_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/accounts",
            post(open_http::handle).get(query_http::list_accounts),
        )
        .route(
            "/accounts/{id}",
            get(query_http::get_account).delete(close_http::handle),
        )
        .route("/accounts/{id}/deposit", post(change_balance_http::deposit))
        .route("/accounts/{id}/withdraw", post(change_balance_http::withdraw))
        .with_state(state)
}

/// REST and GraphQL routes behind request tracing and a permissive CORS policy.
pub fn app(state: AppState) -> Router {
    router(state.clone())
        .merge(graphql::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
