/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - 認証は app 側で router 全体に掛ける (除外パスは PathPolicy で判定)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{
    index::{forbidden, stats, status, unauthorized},
    users::{create_user, delete_user, get_user, list_users},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(status))
        .route("/stats", get(stats))
        .route("/unauthorized", get(unauthorized))
        .route("/forbidden", get(forbidden))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{user_id}", get(get_user).delete(delete_user))
}
