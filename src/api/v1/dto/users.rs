/*
 * Responsibility
 * - Users の request/response DTO
 * - validation (形式チェック) 用の validate()
 * - password (digest) は response に出さない
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::user_repo::User;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.as_deref().is_none_or(|e| e.trim().is_empty()) {
            return Err("email missing");
        }
        if self.password.as_deref().is_none_or(str::is_empty) {
            return Err("password missing");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let display_name = user.display_name();
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            display_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: Option<&str>, password: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            email: email.map(Into::into),
            password: password.map(Into::into),
            first_name: None,
            last_name: None,
        }
    }

    #[test]
    fn validate_requires_email_and_password() {
        assert_eq!(request(None, Some("pwd")).validate(), Err("email missing"));
        assert_eq!(request(Some(" "), Some("pwd")).validate(), Err("email missing"));
        assert_eq!(request(Some("a@b.c"), None).validate(), Err("password missing"));
        assert_eq!(request(Some("a@b.c"), Some("")).validate(), Err("password missing"));
        assert_eq!(request(Some("a@b.c"), Some("pwd")).validate(), Ok(()));
    }

    #[test]
    fn response_has_no_password() {
        let res = UserResponse::from(User::new("a@b.c", "pwd"));
        let json = serde_json::to_value(&res).unwrap();

        assert_eq!(json["email"], "a@b.c");
        assert!(json.get("password").is_none());
        assert!(json.get("_password").is_none());
    }
}
