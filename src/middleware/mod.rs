/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: 認証 (AuthScheme) / http: request-id, trace, timeout, CORS
 */
pub mod auth;
pub mod http;
