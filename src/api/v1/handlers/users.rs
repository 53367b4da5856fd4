/*
 * Responsibility
 * - /users 系 handler
 * - /users/me は middleware が解決した CurrentUser を返す
 * - password は digest にしてから repo に渡す
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::v1::{
        dto::users::{CreateUserRequest, UserResponse},
        extractors::CurrentUser,
    },
    error::AppError,
    repos::user_repo::User,
    state::AppState,
};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_USER", msg))?;

    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(AppError::bad_request("INVALID_USER", "email or password missing"));
    };

    let user = User::new(email.trim(), &password).with_name(req.first_name, req.last_name);
    state.users.insert(&user).await?;

    tracing::info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn get_user(
    State(state): State<AppState>,
    current: Option<CurrentUser>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    if user_id == "me" {
        // "me" only makes sense for an authenticated request
        let CurrentUser(user) = current.ok_or(AppError::not_found("user"))?;
        return Ok(Json(user.into()));
    }

    let user_id = Uuid::parse_str(&user_id).map_err(|_| AppError::not_found("user"))?;
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::not_found("user"))?;

    Ok(Json(user.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user_id = Uuid::parse_str(&user_id).map_err(|_| AppError::not_found("user"))?;

    if state.users.delete(user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("user"))
    }
}
