/// Factory: pick the `AuthScheme` named by application `Config`.
use std::sync::Arc;

use crate::config::{AuthType, Config};
use crate::services::auth::{
    AuthScheme, BaseAuth, BasicAuth, SessionAuth, SessionStore, UserStore,
};

/// `None` means authentication is switched off and every route is open.
pub fn build_auth_scheme<R>(config: &Config, repo: Arc<R>) -> Option<Arc<dyn AuthScheme>>
where
    R: UserStore + SessionStore + 'static,
{
    let scheme: Arc<dyn AuthScheme> = match config.auth_type {
        AuthType::Disabled => return None,
        AuthType::Base => Arc::new(BaseAuth),
        AuthType::Basic => Arc::new(BasicAuth::new(repo)),
        AuthType::Session => Arc::new(SessionAuth::new(repo, config.session_name.clone())),
    };

    tracing::info!(scheme = scheme.name(), "authentication enabled");
    Some(scheme)
}
