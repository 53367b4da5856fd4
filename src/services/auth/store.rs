//! Store interfaces the auth pipeline reads from.
//!
//! Implemented by `PgUserRepo` in production and `MemoryUserRepo` in tests.
//! Both traits are object-safe so schemes can hold `Arc<dyn ...>`.
use async_trait::async_trait;
use uuid::Uuid;

use crate::repos::error::RepoResult;
use crate::repos::user_repo::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users registered under `email`; the auth pipeline uses the first.
    async fn search_by_email(&self, email: &str) -> RepoResult<Vec<User>>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    async fn list(&self) -> RepoResult<Vec<User>>;

    async fn count(&self) -> RepoResult<i64>;

    async fn insert(&self, user: &User) -> RepoResult<()>;

    /// Returns `false` when no user had that id.
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    // Resolve an opaque session id to its owner. Creating or expiring
    // sessions is not part of this interface.
    async fn find_by_session(&self, session_id: &str) -> RepoResult<Option<User>>;
}
