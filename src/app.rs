/*
 * Responsibility
 * - Config読み込み → 依存生成 (PgPool, UserStore, AuthScheme) → Router 組み立て
 * - Middleware の適用 (認証 / HTTP 共通)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::Config,
    middleware,
    repos::PgUserRepo,
    services::auth::{PathPolicy, build_auth_scheme},
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,hello_auth=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing (stderr may be hidden).
        tracing::error!(?info, "panic");

        // Development: crash the whole process so we notice immediately.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = middleware::http::apply(build_router(state), &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    let repo = Arc::new(PgUserRepo::new(pool));
    let auth = build_auth_scheme(config, repo.clone());
    if auth.is_none() {
        tracing::warn!("AUTH_TYPE not set, authentication disabled");
    }

    let path_policy = PathPolicy::new(config.auth_excluded_paths.iter().cloned());

    Ok(AppState::new(repo, auth, path_policy))
}

/// Routes + authentication, without the HTTP-level layers.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new().nest("/api/v1", api::v1::routes());

    middleware::auth::access::apply(router, state.clone()).with_state(state)
}
