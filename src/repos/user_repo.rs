/*
 * Responsibility
 * - users / user_sessions テーブル向け SQLx 操作
 * - UserStore / SessionStore の PostgreSQL 実装
 * - DB エラーは RepoError で返す (auth 側で fail-closed に畳む)
 *
 * Schema (assumed):
 * - users.id (uuid), users.email (text), users._password (text, nullable)
 * - users.first_name / users.last_name (text, nullable)
 * - users.created_at / users.updated_at (timestamptz)
 * - user_sessions.session_id (text), user_sessions.user_id (uuid)
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoResult;
use crate::services::auth::store::{SessionStore, UserStore};
use crate::services::password;

/// A user record. This is the principal handed to handlers once authenticated.
#[derive(Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    // hex SHA-256 digest, never the clear password
    #[sqlx(rename = "_password")]
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print the password digest
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

impl User {
    /// Build a fresh record; the clear password is hashed here and dropped.
    pub fn new(email: impl Into<String>, password: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password: Some(password::hash_password(password)),
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_name(mut self, first_name: Option<String>, last_name: Option<String>) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }

    /// A user without a stored digest never authenticates.
    pub fn is_valid_password(&self, password: &str) -> bool {
        match self.password.as_deref() {
            Some(stored) => password::verify_password(password, stored),
            None => false,
        }
    }

    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (None, None) => self.email.clone(),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (Some(first), Some(last)) => format!("{first} {last}"),
        }
    }
}

const USER_COLUMNS: &str =
    r#"id, email, _password, first_name, last_name, created_at, updated_at"#;

#[derive(Clone, Debug)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserRepo {
    async fn search_by_email(&self, email: &str) -> RepoResult<Vec<User>> {
        // oldest first, so "first match" is stable across calls
        let rows = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE email = $1
            ORDER BY created_at ASC
            "#
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            ORDER BY created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn count(&self) -> RepoResult<i64> {
        let n = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(n)
    }

    async fn insert(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, _password, first_name, last_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(user.password.as_deref())
        .bind(user.first_name.as_deref())
        .bind(user.last_name.as_deref())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SessionStore for PgUserRepo {
    async fn find_by_session(&self, session_id: &str) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.email, u._password, u.first_name, u.last_name, u.created_at, u.updated_at
            FROM user_sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.session_id = $1
            LIMIT 1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
