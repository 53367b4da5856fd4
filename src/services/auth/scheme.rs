//! The pluggable authentication scheme contract.
//!
//! A scheme reads whatever credential carrier it understands from the request
//! headers and turns it into an `AuthOutcome`. Every failure inside a scheme
//! collapses to `Unauthenticated`, so callers cannot tell which step failed.
use async_trait::async_trait;
use axum::http::{HeaderMap, header};

use crate::repos::user_repo::User;
use crate::services::auth::credentials::CredentialError;

#[derive(Debug, Clone)]
pub enum AuthOutcome {
    Authenticated(User),
    Unauthenticated,
    /// The credential carrier exists but is not representable as text.
    Malformed,
}

impl AuthOutcome {
    pub fn into_user(self) -> Option<User> {
        match self {
            AuthOutcome::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

impl From<Result<User, CredentialError>> for AuthOutcome {
    fn from(result: Result<User, CredentialError>) -> Self {
        match result {
            Ok(user) => AuthOutcome::Authenticated(user),
            Err(err) => {
                tracing::debug!(reason = %err, "authentication failed");
                err.into_outcome()
            }
        }
    }
}

#[async_trait]
pub trait AuthScheme: Send + Sync {
    /// Short scheme name for logs.
    fn name(&self) -> &'static str;

    /// `WWW-Authenticate` challenge sent with 401 responses, if any.
    fn challenge(&self) -> Option<&'static str> {
        None
    }

    /// The credential value this scheme reads, as text.
    fn authorization_header(&self, headers: &HeaderMap) -> Option<String> {
        header_text(headers, header::AUTHORIZATION.as_str())
            .ok()
            .flatten()
            .map(str::to_owned)
    }

    /// Whether the request carries this scheme's credential carrier at all,
    /// readable or not.
    fn has_credentials(&self, headers: &HeaderMap) -> bool {
        headers.contains_key(header::AUTHORIZATION)
    }

    async fn authenticate(&self, headers: &HeaderMap) -> AuthOutcome;
}

/// Read a header as text.
///
/// `Ok(None)` when absent, `Err(NonTextHeader)` when present but not visible
/// ASCII.
pub fn header_text<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, CredentialError> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(Some)
            .map_err(|_| CredentialError::NonTextHeader),
    }
}

/// Scheme that understands no credential transport: every request is
/// unauthenticated.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaseAuth;

#[async_trait]
impl AuthScheme for BaseAuth {
    fn name(&self) -> &'static str {
        "auth"
    }

    async fn authenticate(&self, _headers: &HeaderMap) -> AuthOutcome {
        AuthOutcome::Unauthenticated
    }
}
