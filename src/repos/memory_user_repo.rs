//! In-memory `UserStore` / `SessionStore`.
//!
//! Used by tests and local wiring. Counts lookups so callers can assert how
//! many times the store was queried.
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repos::error::RepoResult;
use crate::repos::user_repo::User;
use crate::services::auth::store::{SessionStore, UserStore};

#[derive(Default)]
struct Inner {
    // insertion order is kept so `search_by_email` has a stable first match
    users: Vec<User>,
    sessions: HashMap<String, Uuid>,
}

#[derive(Clone, Default)]
pub struct MemoryUserRepo {
    inner: Arc<RwLock<Inner>>,
    searches: Arc<AtomicUsize>,
    session_lookups: Arc<AtomicUsize>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_session(&self, session_id: impl Into<String>, user_id: Uuid) {
        self.inner
            .write()
            .await
            .sessions
            .insert(session_id.into(), user_id);
    }

    /// Number of `search_by_email` calls so far.
    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    /// Number of `find_by_session` calls so far.
    pub fn session_lookup_count(&self) -> usize {
        self.session_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemoryUserRepo {
    async fn search_by_email(&self, email: &str) -> RepoResult<Vec<User>> {
        self.searches.fetch_add(1, Ordering::SeqCst);

        let inner = self.inner.read().await;
        Ok(inner
            .users
            .iter()
            .filter(|u| u.email == email)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.inner.read().await.users.len() as i64)
    }

    async fn insert(&self, user: &User) -> RepoResult<()> {
        self.inner.write().await.users.push(user.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        inner.sessions.retain(|_, user_id| *user_id != id);
        Ok(inner.users.len() < before)
    }
}

#[async_trait]
impl SessionStore for MemoryUserRepo {
    async fn find_by_session(&self, session_id: &str) -> RepoResult<Option<User>> {
        self.session_lookups.fetch_add(1, Ordering::SeqCst);

        let inner = self.inner.read().await;
        let Some(user_id) = inner.sessions.get(session_id) else {
            return Ok(None);
        };
        Ok(inner.users.iter().find(|u| u.id == *user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_counts_and_filters_by_email() {
        let repo = MemoryUserRepo::new();
        repo.insert(&User::new("a@hbtn.io", "a")).await.unwrap();
        repo.insert(&User::new("b@hbtn.io", "b")).await.unwrap();

        let found = repo.search_by_email("b@hbtn.io").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].email, "b@hbtn.io");

        assert!(repo.search_by_email("c@hbtn.io").await.unwrap().is_empty());
        assert_eq!(repo.search_count(), 2);
    }

    #[tokio::test]
    async fn delete_drops_user_and_sessions() {
        let repo = MemoryUserRepo::new();
        let user = User::new("a@hbtn.io", "a");
        repo.insert(&user).await.unwrap();
        repo.add_session("sid", user.id).await;

        assert!(repo.find_by_session("sid").await.unwrap().is_some());
        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.delete(user.id).await.unwrap());
        assert!(repo.find_by_session("sid").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(repo.session_lookup_count(), 2);
    }
}
