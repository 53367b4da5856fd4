//! Path exclusion policy: decides whether a request path needs authentication.
//!
//! Matching is a plain prefix comparison after removing the trailing wildcard
//! marker, so `/api/v1/status*` and `/api/v1/status` exclude the same paths.
use std::sync::Arc;

/// Trailing marker accepted on exclusion patterns.
pub const WILDCARD: char = '*';

/// Returns `true` when `path` must be authenticated.
///
/// - no path => `true` (fail closed)
/// - no (or empty) exclusion list => `true`
/// - some pattern, stripped of trailing `*`, is a prefix of `path` => `false`
pub fn require_auth<S: AsRef<str>>(path: Option<&str>, excluded_paths: Option<&[S]>) -> bool {
    let Some(path) = path else {
        return true;
    };

    let Some(excluded_paths) = excluded_paths.filter(|p| !p.is_empty()) else {
        return true;
    };

    !excluded_paths
        .iter()
        .any(|pattern| path.starts_with(pattern.as_ref().trim_end_matches(WILDCARD)))
}

/// Configured exclusion list, shared by every request.
#[derive(Clone, Debug, Default)]
pub struct PathPolicy {
    excluded_paths: Arc<[String]>,
}

impl PathPolicy {
    pub fn new<I, S>(excluded_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_paths: excluded_paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn requires_auth(&self, path: &str) -> bool {
        require_auth(Some(path), Some(&self.excluded_paths[..]))
    }

    pub fn excluded_paths(&self) -> &[String] {
        &self.excluded_paths
    }
}
