//! Header value → credential pair.
use thiserror::Error;

use crate::services::auth::scheme::AuthOutcome;

/// Scheme prefix for HTTP Basic credentials (case-sensitive).
pub const BASIC_PREFIX: &str = "Basic ";

/// Separator between identity and secret in decoded Basic credentials.
pub const SEPARATOR: char = ':';

/// Why a credential did not resolve to a user.
///
/// Kept internal to the auth pipeline: callers only ever see an `AuthOutcome`.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential header missing")]
    MissingHeader,
    #[error("credential header is not visible ascii")]
    NonTextHeader,
    #[error("credential header has an unexpected scheme")]
    MalformedHeader,
    #[error("credential blob could not be decoded")]
    DecodeFailure,
    #[error("decoded credential has no separator")]
    MissingSeparator,
    #[error("unknown identity")]
    UnknownIdentity,
    #[error("secret mismatch")]
    SecretMismatch,
    #[error("credential store unavailable")]
    StoreUnavailable,
}

impl CredentialError {
    /// Collapse a pipeline failure into the externally visible outcome.
    pub fn into_outcome(self) -> AuthOutcome {
        match self {
            CredentialError::NonTextHeader => AuthOutcome::Malformed,
            _ => AuthOutcome::Unauthenticated,
        }
    }
}

/// Strip `prefix` (once) from a header value.
///
/// Returns `None` when the header is absent or does not start with `prefix`.
pub fn extract_base64_blob<'a>(header: Option<&'a str>, prefix: &str) -> Option<&'a str> {
    header?.strip_prefix(prefix)
}

/// Split decoded credentials on the first separator.
///
/// `(None, None)` when the input is absent or has no separator; the secret
/// keeps any further separators.
pub fn split_credentials(decoded: Option<&str>) -> (Option<&str>, Option<&str>) {
    match decoded.and_then(|d| d.split_once(SEPARATOR)) {
        Some((identity, secret)) => (Some(identity), Some(secret)),
        None => (None, None),
    }
}
