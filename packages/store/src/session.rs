//! # Authentication slice and durable session storage
//!
//! The only client state that outlives a page load is the session: the bearer
//! token under [`ACCESS_TOKEN_KEY`] and the JSON [`AccountSnapshot`] under
//! [`USER_KEY`], kept in a [`KeyValueStore`]. Implementations:
//!
//! | Store | Platform |
//! |-------|----------|
//! | [`crate::MemoryStore`] | tests, native fallback |
//! | `FileStore` | native, one file per key |
//! | `LocalStorage` | browser `window.localStorage` (`web` feature) |
//!
//! [`AuthSlice::restore`] reads both keys once at boot. A snapshot that no
//! longer deserializes counts as no session: both keys are cleared and the
//! user simply lands on the login page.

use thiserror::Error;

use crate::models::{AccountSnapshot, Role, User};
use crate::navigation::Viewer;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const USER_KEY: &str = "user";

const LOGIN_FAILED: &str = "Login failed. Please try again.";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Durable string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// An authenticated session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub account: AccountSnapshot,
}

impl Session {
    pub fn user(&self) -> &User {
        &self.account.user
    }

    pub fn role(&self) -> Option<Role> {
        self.account.role()
    }

    fn persist(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        let snapshot = serde_json::to_string(&self.account)?;
        store.set(ACCESS_TOKEN_KEY, &self.access_token)?;
        store.set(USER_KEY, &snapshot)
    }
}

fn clear(store: &dyn KeyValueStore) {
    for key in [ACCESS_TOKEN_KEY, USER_KEY] {
        if let Err(e) = store.remove(key) {
            tracing::warn!(key, error = %e, "Failed to clear session key");
        }
    }
}

/// The `auth` slice: the session, if any, and the state of the login call.
///
/// "Authenticated" is `session.is_some()`, so a user without a token (or the
/// reverse) cannot be represented.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSlice {
    pub session: Option<Session>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthSlice {
    /// Rebuild the slice from durable storage.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let (Some(access_token), Some(raw)) = (store.get(ACCESS_TOKEN_KEY), store.get(USER_KEY))
        else {
            return Self::default();
        };

        match serde_json::from_str::<AccountSnapshot>(&raw) {
            Ok(account) => Self {
                session: Some(Session {
                    access_token,
                    account,
                }),
                ..Self::default()
            },
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable cached session");
                clear(store);
                Self::default()
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().and_then(Session::role)
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(Session::user)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    pub fn viewer(&self) -> Viewer {
        match &self.session {
            Some(session) => Viewer::Authenticated(session.role()),
            None => Viewer::Anonymous,
        }
    }

    pub fn login_pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Install the session and persist it.
    ///
    /// A storage failure only costs persistence across reloads; the in-memory
    /// session stays valid.
    pub fn login_fulfilled(&mut self, session: Session, store: &dyn KeyValueStore) {
        if let Err(e) = session.persist(store) {
            tracing::warn!(error = %e, "Failed to persist session");
        }
        self.loading = false;
        self.error = None;
        self.session = Some(session);
    }

    pub fn login_rejected(&mut self, reason: Option<String>) {
        self.loading = false;
        self.session = None;
        self.error = Some(reason.unwrap_or_else(|| LOGIN_FAILED.to_string()));
    }

    pub fn set_credentials(&mut self, session: Session, store: &dyn KeyValueStore) {
        if let Err(e) = session.persist(store) {
            tracing::warn!(error = %e, "Failed to persist session");
        }
        self.session = Some(session);
    }

    pub fn logout(&mut self, store: &dyn KeyValueStore) {
        self.session = None;
        self.error = None;
        clear(store);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn session(role_id: u8) -> Session {
        Session {
            access_token: "tok-123".into(),
            account: AccountSnapshot {
                user: User {
                    id: 5,
                    name: "Ann Ray".into(),
                    role_id,
                    ..Default::default()
                },
                pet: None,
            },
        }
    }

    #[test]
    fn test_login_persists_and_restores() {
        let store = MemoryStore::new();
        let mut auth = AuthSlice::default();
        assert!(!auth.is_authenticated());

        auth.login_pending();
        assert!(auth.loading);
        auth.login_fulfilled(session(2), &store);

        assert!(auth.is_authenticated());
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok-123"));
        assert!(store.get(USER_KEY).is_some());

        let restored = AuthSlice::restore(&store);
        assert_eq!(restored.session, auth.session);
        assert_eq!(restored.role(), Some(Role::Customer));
    }

    #[test]
    fn test_restore_discards_corrupt_snapshot() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "tok").unwrap();
        store.set(USER_KEY, "{not json").unwrap();

        let auth = AuthSlice::restore(&store);
        assert!(!auth.is_authenticated());
        assert!(auth.error.is_none());
        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn test_restore_needs_both_keys() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "tok").unwrap();
        assert!(!AuthSlice::restore(&store).is_authenticated());
    }

    #[test]
    fn test_logout_clears_storage() {
        let store = MemoryStore::new();
        let mut auth = AuthSlice::default();
        auth.set_credentials(session(1), &store);
        assert_eq!(auth.viewer(), Viewer::Authenticated(Some(Role::Admin)));

        auth.logout(&store);
        assert_eq!(auth.viewer(), Viewer::Anonymous);
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn test_login_rejected_default_message() {
        let mut auth = AuthSlice::default();
        auth.login_pending();
        auth.login_rejected(None);
        assert!(!auth.loading);
        assert_eq!(auth.error.as_deref(), Some(LOGIN_FAILED));
        assert!(!auth.is_authenticated());
    }
}
