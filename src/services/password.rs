//! Password digests for stored user records.
//!
//! Stored form is the lowercase hex SHA-256 of the UTF-8 password.
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Compare `password` against a stored digest in constant time.
///
/// Stored digests are compared case-insensitively (upper-case hex is accepted).
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let candidate = hash_password(password);
    let stored = stored_hash.to_ascii_lowercase();

    candidate.as_bytes().ct_eq(stored.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        assert_eq!(
            hash_password("H0lbertonSchool98!"),
            hex::encode(Sha256::digest(b"H0lbertonSchool98!"))
        );
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn verifies_matching_password() {
        let stored = hash_password("pwd");
        assert!(verify_password("pwd", &stored));
        assert!(verify_password("pwd", &stored.to_ascii_uppercase()));
    }

    #[test]
    fn rejects_wrong_password_or_garbage_hash() {
        let stored = hash_password("pwd");
        assert!(!verify_password("wrong", &stored));
        assert!(!verify_password("pwd", "not-a-digest"));
        assert!(!verify_password("pwd", ""));
    }
}
