//! Credential pair → user, via the injected `UserStore`.
use std::sync::Arc;

use crate::repos::user_repo::User;
use crate::services::auth::credentials::CredentialError;
use crate::services::auth::store::UserStore;

#[derive(Clone)]
pub struct PrincipalResolver {
    store: Arc<dyn UserStore>,
}

impl PrincipalResolver {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Resolve `(email, password)` to a user, or `None`.
    ///
    /// Absent arguments short-circuit without touching the store.
    pub async fn resolve(&self, email: Option<&str>, password: Option<&str>) -> Option<User> {
        let (email, password) = (email?, password?);
        self.lookup(email, password).await.ok()
    }

    /// Same as `resolve`, keeping the failure reason for the caller's logs.
    pub(crate) async fn lookup(&self, email: &str, password: &str) -> Result<User, CredentialError> {
        let users = self.store.search_by_email(email).await.map_err(|err| {
            tracing::error!(error = %err, "user lookup failed");
            CredentialError::StoreUnavailable
        })?;

        if users.len() > 1 {
            tracing::warn!(matches = users.len(), "several users share one email, using the first");
        }

        let user = users
            .into_iter()
            .next()
            .ok_or(CredentialError::UnknownIdentity)?;

        if !user.is_valid_password(password) {
            return Err(CredentialError::SecretMismatch);
        }

        Ok(user)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;
    use crate::repos::MemoryUserRepo;
    use crate::repos::error::{RepoError, RepoResult};
    use crate::services::auth::store::SessionStore;

    /// Store whose every call fails like a dropped connection pool.
    pub(crate) struct FailingStore;

    fn unavailable<T>() -> RepoResult<T> {
        Err(RepoError::Db(sqlx::Error::PoolTimedOut))
    }

    #[async_trait]
    impl UserStore for FailingStore {
        async fn search_by_email(&self, _email: &str) -> RepoResult<Vec<User>> {
            unavailable()
        }
        async fn find_by_id(&self, _id: Uuid) -> RepoResult<Option<User>> {
            unavailable()
        }
        async fn list(&self) -> RepoResult<Vec<User>> {
            unavailable()
        }
        async fn count(&self) -> RepoResult<i64> {
            unavailable()
        }
        async fn insert(&self, _user: &User) -> RepoResult<()> {
            unavailable()
        }
        async fn delete(&self, _id: Uuid) -> RepoResult<bool> {
            unavailable()
        }
    }

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn find_by_session(&self, _session_id: &str) -> RepoResult<Option<User>> {
            unavailable()
        }
    }

    async fn seeded() -> (MemoryUserRepo, User) {
        let repo = MemoryUserRepo::new();
        let bob = User::new("bob@hbtn.io", "H0lberton");
        repo.insert(&bob).await.unwrap();
        (repo, bob)
    }

    #[tokio::test]
    async fn resolves_matching_credentials() {
        let (repo, bob) = seeded().await;
        let resolver = PrincipalResolver::new(Arc::new(repo.clone()));

        let user = resolver
            .resolve(Some("bob@hbtn.io"), Some("H0lberton"))
            .await
            .expect("bob resolves");

        assert_eq!(user.id, bob.id);
        assert_eq!(repo.search_count(), 1);
    }

    #[tokio::test]
    async fn absent_arguments_skip_the_store() {
        let (repo, _) = seeded().await;
        let resolver = PrincipalResolver::new(Arc::new(repo.clone()));

        assert!(resolver.resolve(None, Some("H0lberton")).await.is_none());
        assert!(resolver.resolve(Some("bob@hbtn.io"), None).await.is_none());
        assert!(resolver.resolve(None, None).await.is_none());
        assert_eq!(repo.search_count(), 0);
    }

    #[tokio::test]
    async fn unknown_identity_queries_once() {
        let (repo, _) = seeded().await;
        let resolver = PrincipalResolver::new(Arc::new(repo.clone()));

        let err = resolver.lookup("alice@hbtn.io", "H0lberton").await.unwrap_err();

        assert!(matches!(err, CredentialError::UnknownIdentity));
        assert_eq!(repo.search_count(), 1);
    }

    #[tokio::test]
    async fn wrong_password_is_a_mismatch() {
        let (repo, _) = seeded().await;
        let resolver = PrincipalResolver::new(Arc::new(repo));

        let err = resolver.lookup("bob@hbtn.io", "wrongpass").await.unwrap_err();
        assert!(matches!(err, CredentialError::SecretMismatch));
    }

    #[tokio::test]
    async fn first_match_wins() {
        let (repo, bob) = seeded().await;
        repo.insert(&User::new("bob@hbtn.io", "other")).await.unwrap();
        let resolver = PrincipalResolver::new(Arc::new(repo));

        let user = resolver.lookup("bob@hbtn.io", "H0lberton").await.unwrap();
        assert_eq!(user.id, bob.id);

        // second record is never consulted
        let err = resolver.lookup("bob@hbtn.io", "other").await.unwrap_err();
        assert!(matches!(err, CredentialError::SecretMismatch));
    }

    #[tokio::test]
    async fn store_failure_fails_closed() {
        let resolver = PrincipalResolver::new(Arc::new(FailingStore));

        let err = resolver.lookup("bob@hbtn.io", "H0lberton").await.unwrap_err();
        assert!(matches!(err, CredentialError::StoreUnavailable));
        assert!(
            resolver
                .resolve(Some("bob@hbtn.io"), Some("H0lberton"))
                .await
                .is_none()
        );
    }
}
