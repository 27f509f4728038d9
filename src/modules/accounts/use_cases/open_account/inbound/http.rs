use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::accounts::adapters::inbound::http_error::error_response;
use crate::modules::accounts::use_cases::open_account::command::OpenAccount;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct OpenAccountBody {
    pub owner_name: String,
    #[serde(default)]
    pub balance: Decimal,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<OpenAccountBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = OpenAccount {
        owner_name: body.owner_name,
        initial_balance: body.balance,
    };

    match state.open_handler.handle(command).await {
        Ok(account) => (StatusCode::CREATED, Json(account)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod open_account_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::accounts::use_cases::change_balance::retry_policy::RetryPolicy;
    use crate::shell::state::{AppState, Store};

    use super::handle;

    fn app() -> Router {
        let state = AppState::new(Arc::new(Store::new()), RetryPolicy::default());
        Router::new().route("/accounts", post(handle)).with_state(state)
    }

    fn open_request(body: &'static str) -> Request<Body> {
        Request::post("/accounts")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_new_account() {
        let response = app()
            .oneshot(open_request(r#"{"owner_name":"Ada","balance":100.0}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json.get("id").is_some());
        assert_eq!(json["owner_name"], "Ada");
        assert_eq!(json["version"], 0);
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_negative_balance() {
        let response = app()
            .oneshot(open_request(r#"{"owner_name":"Ada","balance":"-1"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app().oneshot(open_request("not-json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
