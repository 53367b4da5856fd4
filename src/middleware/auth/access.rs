//! Request authentication → `CurrentUser` を extensions に入れる
//!
//! Flow (per request):
//! - 除外パス (PathPolicy) なら何もしない
//! - credential が無い → 401 (scheme に challenge があれば WWW-Authenticate)
//! - AuthScheme が Malformed → 400
//! - AuthScheme が Unauthenticated → 403
//! - Authenticated → CurrentUser を extensions に入れて次へ

use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, State},
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::CurrentUser;
use crate::error::AppError;
use crate::services::auth::AuthOutcome;
use crate::state::AppState;

/// Router 全体に認証を掛ける。
///
/// Paths are matched in full (`/api/v1/...`), so apply this on the outer
/// router, after nesting.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    OriginalUri(original_uri): OriginalUri,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(scheme) = state.auth.as_deref() else {
        return Ok(next.run(req).await);
    };

    let path = original_uri.path();
    if !state.path_policy.requires_auth(path) {
        return Ok(next.run(req).await);
    }

    if !scheme.has_credentials(req.headers()) {
        tracing::debug!(path = %path, scheme = scheme.name(), "no credentials");
        return Err(AppError::Unauthorized {
            challenge: scheme.challenge(),
        });
    }

    let user = match scheme.authenticate(req.headers()).await {
        AuthOutcome::Authenticated(user) => user,
        AuthOutcome::Malformed => {
            tracing::warn!(path = %path, scheme = scheme.name(), "malformed credentials");
            return Err(AppError::bad_request(
                "MALFORMED_CREDENTIALS",
                "malformed credentials",
            ));
        }
        AuthOutcome::Unauthenticated => {
            tracing::warn!(path = %path, scheme = scheme.name(), "authentication failed");
            return Err(AppError::Forbidden);
        }
    };

    tracing::debug!(user_id = %user.id, path = %path, "authenticated");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
