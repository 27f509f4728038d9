use std::time::Duration;

use axum::{
    Json,
    extract::rejection::QueryRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::accounts::adapters::inbound::http_error::error_response;
use crate::modules::accounts::use_cases::change_balance::command::BalanceChange;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct BalanceChangeParams {
    pub amount: Decimal,
    pub timeout_ms: Option<u64>,
}

pub async fn deposit(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    params: Result<Query<BalanceChangeParams>, QueryRejection>,
) -> impl IntoResponse {
    match params {
        Ok(Query(params)) => {
            change_balance(
                &state,
                &account_id,
                BalanceChange::Deposit(params.amount),
                params.timeout_ms,
            )
            .await
        }
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    }
}

pub async fn withdraw(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    params: Result<Query<BalanceChangeParams>, QueryRejection>,
) -> impl IntoResponse {
    match params {
        Ok(Query(params)) => {
            change_balance(
                &state,
                &account_id,
                BalanceChange::Withdrawal(params.amount),
                params.timeout_ms,
            )
            .await
        }
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    }
}

async fn change_balance(
    state: &AppState,
    account_id: &str,
    change: BalanceChange,
    timeout_ms: Option<u64>,
) -> axum::response::Response {
    let engine = &state.mutation_engine;
    let result = match timeout_ms {
        Some(ms) => {
            engine
                .apply_delta_within(account_id, change, Duration::from_millis(ms))
                .await
        }
        None => engine.apply_delta(account_id, change).await,
    };
    match result {
        Ok(account) => Json(account).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod change_balance_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    use crate::modules::accounts::core::ports::AccountStore;
    use crate::modules::accounts::use_cases::change_balance::retry_policy::RetryPolicy;
    use crate::shell::state::{AppState, Store};
    use crate::tests::fixtures::stores::seeded_store;

    use super::{deposit, withdraw};

    fn app(store: Arc<Store>) -> Router {
        Router::new()
            .route("/accounts/{id}/deposit", post(deposit))
            .route("/accounts/{id}/withdraw", post(withdraw))
            .with_state(AppState::new(
                store,
                RetryPolicy::fixed(5, Duration::from_millis(1)),
            ))
    }

    async fn post_to(app: Router, uri: String) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::post(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_updated_account_on_deposit() {
        let (store, account) = seeded_store("100.0").await;
        let (status, json) = post_to(
            app(store),
            format!("/accounts/{}/deposit?amount=1.5", account.id),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let balance = Decimal::from_str(json["balance"].as_str().unwrap()).unwrap();
        assert_eq!(balance, Decimal::from_str("101.5").unwrap());
        assert_eq!(json["version"], 1);
    }

    #[tokio::test]
    async fn it_should_return_400_when_funds_are_insufficient() {
        let (store, account) = seeded_store("5.0").await;
        let (status, json) = post_to(
            app(store.clone()),
            format!("/accounts/{}/withdraw?amount=10", account.id),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("insufficient funds"));
        assert_eq!(store.get(&account.id).await.unwrap(), account);
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_non_positive_amount() {
        let (store, account) = seeded_store("5.0").await;
        let (status, _) = post_to(
            app(store.clone()),
            format!("/accounts/{}/withdraw?amount=-3.0", account.id),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(store.reads(), 0);
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_amount_is_missing() {
        let (store, account) = seeded_store("5.0").await;
        let (status, json) = post_to(app(store), format!("/accounts/{}/deposit", account.id)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_account() {
        let (store, _) = seeded_store("5.0").await;
        let (status, _) = post_to(app(store), "/accounts/missing/deposit?amount=1".into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_408_when_the_deadline_passes() {
        let (store, account) = seeded_store("5.0").await;
        store.set_delay_update_ms(200);
        let (status, _) = post_to(
            app(store.clone()),
            format!("/accounts/{}/deposit?amount=1&timeout_ms=20", account.id),
        )
        .await;

        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(store.committed_updates(), 0);
    }
}
