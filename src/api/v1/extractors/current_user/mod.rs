/*!
 * Authenticated user extractor
 *
 * Responsibility:
 * - 認証済みユーザー（CurrentUser）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - CurrentUser (`CurrentUser` / `Option<CurrentUser>` として extract できる)
 */

mod core;
mod types;

pub use types::CurrentUser;
