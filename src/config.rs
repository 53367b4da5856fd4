/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, CORS 許可、Auth 設定など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::services::auth::session::DEFAULT_SESSION_NAME;

pub const DEFAULT_EXCLUDED_PATHS: &str = "/api/v1/status*,/api/v1/unauthorized*,/api/v1/forbidden*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Which `AuthScheme` guards the API (`AUTH_TYPE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// AUTH_TYPE unset: no authentication at all
    Disabled,
    Base,
    Basic,
    Session,
}

impl AuthType {
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::Disabled);
        };

        match raw.to_ascii_lowercase().as_str() {
            "auth" => Ok(Self::Base),
            "basic_auth" | "basic" => Ok(Self::Basic),
            "session_auth" | "session" => Ok(Self::Session),
            _ => Err(ConfigError::Invalid("AUTH_TYPE")),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub database_max_connections: u32,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub request_timeout_seconds: u64,

    pub auth_type: AuthType,
    pub auth_excluded_paths: Vec<String>,
    pub session_name: String,
}

/// Split a comma-separated env value, dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let database_max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);

        let app_env = AppEnv::from_env();

        let cors_allowed_origins =
            split_list(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let request_timeout_seconds = std::env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let auth_type = AuthType::parse(std::env::var("AUTH_TYPE").ok().as_deref())?;

        // An explicitly empty AUTH_EXCLUDED_PATHS means "guard everything".
        let auth_excluded_paths = split_list(
            &std::env::var("AUTH_EXCLUDED_PATHS")
                .unwrap_or_else(|_| DEFAULT_EXCLUDED_PATHS.to_string()),
        );

        let session_name = std::env::var("SESSION_NAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string());

        Ok(Self {
            addr,
            database_url,
            database_max_connections,
            app_env,
            cors_allowed_origins,
            request_timeout_seconds,
            auth_type,
            auth_excluded_paths,
            session_name,
        })
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            database_url: "postgres://localhost/hello_auth_test".to_string(),
            database_max_connections: 1,
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            request_timeout_seconds: 30,
            auth_type: AuthType::Basic,
            auth_excluded_paths: split_list(DEFAULT_EXCLUDED_PATHS),
            session_name: DEFAULT_SESSION_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_type_defaults_to_disabled() {
        assert_eq!(AuthType::parse(None).unwrap(), AuthType::Disabled);
        assert_eq!(AuthType::parse(Some("  ")).unwrap(), AuthType::Disabled);
    }

    #[test]
    fn auth_type_accepts_known_names() {
        assert_eq!(AuthType::parse(Some("auth")).unwrap(), AuthType::Base);
        assert_eq!(AuthType::parse(Some("basic_auth")).unwrap(), AuthType::Basic);
        assert_eq!(AuthType::parse(Some("Session_Auth")).unwrap(), AuthType::Session);
    }

    #[test]
    fn auth_type_rejects_unknown_names() {
        let err = AuthType::parse(Some("jwt")).unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration: AUTH_TYPE");
    }

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(
            split_list(" /api/v1/status* , ,/api/v1/forbidden*,"),
            vec!["/api/v1/status*".to_string(), "/api/v1/forbidden*".to_string()]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn default_exclusions_cover_public_routes() {
        let excluded = split_list(DEFAULT_EXCLUDED_PATHS);
        assert_eq!(excluded.len(), 3);
        assert!(excluded.iter().all(|p| p.ends_with('*')));
    }
}
