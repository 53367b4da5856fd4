/*
 * Responsibility
 * - GET /status (疎通用、認証除外)
 * - GET /stats (users 件数)
 * - GET /unauthorized, /forbidden (エラーレスポンスの確認用)
 */
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{error::AppError, state::AppState};

pub async fn status() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "OK"})))
}

pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.users.count().await?;
    Ok(Json(json!({"users": users})))
}

pub async fn unauthorized() -> AppError {
    AppError::unauthorized()
}

pub async fn forbidden() -> AppError {
    AppError::Forbidden
}
