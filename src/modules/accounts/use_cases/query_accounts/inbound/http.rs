use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> impl IntoResponse {
    match state.queries.find(&account_id).await {
        Ok(account) => Json(account).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_accounts(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list().await {
        Ok(accounts) => Json(accounts).into_response(),
        Err(e) => e.into_response(),
    }
}
