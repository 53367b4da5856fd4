//! Session authentication: an opaque session id carried in a cookie.
//!
//! Only lookup lives here. Sessions are created and expired elsewhere.
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;

use crate::repos::user_repo::User;
use crate::services::auth::credentials::CredentialError;
use crate::services::auth::scheme::{AuthOutcome, AuthScheme};
use crate::services::auth::store::SessionStore;

pub const DEFAULT_SESSION_NAME: &str = "_my_session_id";

#[derive(Clone)]
pub struct SessionAuth {
    store: Arc<dyn SessionStore>,
    cookie_name: String,
}

impl SessionAuth {
    pub fn new(store: Arc<dyn SessionStore>, cookie_name: impl Into<String>) -> Self {
        Self {
            store,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Value of the session cookie, if the request has one.
    pub fn session_cookie(&self, headers: &HeaderMap) -> Option<String> {
        CookieJar::from_headers(headers)
            .get(&self.cookie_name)
            .map(|cookie| cookie.value().to_owned())
    }

    async fn current_user(&self, headers: &HeaderMap) -> Result<User, CredentialError> {
        let session_id = self
            .session_cookie(headers)
            .filter(|id| !id.is_empty())
            .ok_or(CredentialError::MissingHeader)?;

        self.store
            .find_by_session(&session_id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "session lookup failed");
                CredentialError::StoreUnavailable
            })?
            .ok_or(CredentialError::UnknownIdentity)
    }
}

#[async_trait]
impl AuthScheme for SessionAuth {
    fn name(&self) -> &'static str {
        "session_auth"
    }

    fn authorization_header(&self, headers: &HeaderMap) -> Option<String> {
        self.session_cookie(headers)
    }

    fn has_credentials(&self, headers: &HeaderMap) -> bool {
        self.session_cookie(headers).is_some()
    }

    async fn authenticate(&self, headers: &HeaderMap) -> AuthOutcome {
        self.current_user(headers).await.into()
    }
}
