/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - users: UserStore, auth: AuthScheme, path_policy: 認証除外パス
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::{AuthScheme, PathPolicy, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    // None: authentication disabled
    pub auth: Option<Arc<dyn AuthScheme>>,
    pub path_policy: PathPolicy,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        auth: Option<Arc<dyn AuthScheme>>,
        path_policy: PathPolicy,
    ) -> Self {
        Self {
            users,
            auth,
            path_policy,
        }
    }
}
