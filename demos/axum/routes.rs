use std::sync::PoisonError;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::cors::AppState;

/// Liveness check; a bare `OPTIONS` here is not a preflight and reaches this handler.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn list_messages(State(state): State<AppState>) -> String {
    let messages = state.messages.read().unwrap_or_else(PoisonError::into_inner);
    messages.join("\n")
}

pub async fn post_message(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let text = body.trim();
    if text.is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, "message body is empty").into_response();
    }

    state
        .messages
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(text.to_string());
    StatusCode::CREATED.into_response()
}
