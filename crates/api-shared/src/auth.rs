//! The login placeholder and in-memory session store.
//!
//! This is NOT a security design and must not be copied as a pattern. The
//! password is a single shared literal compared verbatim without hashing,
//! and sessions are process-memory tokens that never expire. It exists only
//! to gate the report log the way the application always has, until a real
//! authentication layer replaces it.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Default shared password, overridable via the `MMS_PASSWORD` environment
/// variable at startup.
pub const DEFAULT_PASSWORD: &str = "TEST";

/// Errors produced by the login placeholder.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid password")]
    InvalidPassword,
    #[error("invalid or expired session token")]
    InvalidSession,
}

/// Validates the provided password against the expected password.
///
/// Returns `Ok(())` if the password matches, or an error if it doesn't.
/// Plain string comparison: placeholder semantics, see the module docs.
pub fn validate_password(provided: &str, expected: &str) -> Result<(), AuthError> {
    if provided == expected {
        Ok(())
    } else {
        Err(AuthError::InvalidPassword)
    }
}

/// In-memory store of issued session tokens.
///
/// Tokens are opaque UUID strings. They never expire and are lost on process
/// exit; the store holds no other session state.
#[derive(Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    /// Creates an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh session token.
    pub fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens
            .write()
            .expect("session store lock poisoned")
            .insert(token.clone());
        token
    }

    /// True when `token` was issued by this store and not yet revoked.
    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens
            .read()
            .expect("session store lock poisoned")
            .contains(token)
    }

    /// Revokes a token. Returns whether the token was known.
    pub fn revoke(&self, token: &str) -> bool {
        self.tokens
            .write()
            .expect("session store lock poisoned")
            .remove(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password_accepts_match() {
        assert!(validate_password("TEST", "TEST").is_ok());
    }

    #[test]
    fn test_validate_password_rejects_mismatch() {
        assert!(matches!(
            validate_password("test", "TEST"),
            Err(AuthError::InvalidPassword)
        ));
        assert!(matches!(
            validate_password("", "TEST"),
            Err(AuthError::InvalidPassword)
        ));
    }

    #[test]
    fn test_issued_token_is_valid() {
        let sessions = SessionStore::new();
        let token = sessions.issue();

        assert!(sessions.is_valid(&token));
    }

    #[test]
    fn test_unknown_token_is_invalid() {
        let sessions = SessionStore::new();
        assert!(!sessions.is_valid("not-a-token"));
    }

    #[test]
    fn test_revoke_invalidates_token() {
        let sessions = SessionStore::new();
        let token = sessions.issue();

        assert!(sessions.revoke(&token));
        assert!(!sessions.is_valid(&token));
        assert!(!sessions.revoke(&token));
    }

    #[test]
    fn test_tokens_are_unique() {
        let sessions = SessionStore::new();
        assert_ne!(sessions.issue(), sessions.issue());
    }

    #[test]
    fn test_store_clones_share_sessions() {
        let sessions = SessionStore::new();
        let clone = sessions.clone();

        let token = sessions.issue();
        assert!(clone.is_valid(&token));
    }
}
