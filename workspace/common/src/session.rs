//! Client-side session: the bearer token and the cached user profile.
//!
//! The session lives in a key/value store (browser local storage in the app,
//! [`MemoryStore`] in tests). It is created on login and destroyed on logout
//! or on the first 401 from any endpoint.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::auth::UserProfile;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const USER_INFO_KEY: &str = "user_info";

/// Synchronous string key/value storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    profile: Option<UserProfile>,
}

impl Session {
    pub fn new(token: impl Into<String>, profile: Option<UserProfile>) -> Self {
        Self {
            token: token.into(),
            profile,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Value of the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Reads the persisted session. Only the token decides whether a session
    /// exists; a missing or corrupt profile just leaves `profile` empty.
    pub fn load(store: &impl SessionStore) -> Option<Self> {
        let token = store.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())?;
        let profile = store.get(USER_INFO_KEY).and_then(|raw| {
            serde_json::from_str::<UserProfile>(&raw)
                .map_err(|e| tracing::warn!("Ignoring unreadable cached profile: {}", e))
                .ok()
        });
        tracing::debug!("Loaded persisted session (profile cached: {})", profile.is_some());
        Some(Self { token, profile })
    }

    pub fn persist(&self, store: &impl SessionStore) {
        store.set(AUTH_TOKEN_KEY, &self.token);
        match self.profile.as_ref().map(serde_json::to_string) {
            Some(Ok(raw)) => store.set(USER_INFO_KEY, &raw),
            Some(Err(e)) => {
                tracing::warn!("Could not cache user profile: {}", e);
                store.remove(USER_INFO_KEY);
            }
            None => store.remove(USER_INFO_KEY),
        }
    }

    /// Removes token and profile together.
    pub fn clear(store: &impl SessionStore) {
        store.remove(AUTH_TOKEN_KEY);
        store.remove(USER_INFO_KEY);
    }
}

/// Global 401 policy applied to every response. Returns `true` when the
/// session was revoked and the caller has to send the user to the login route.
pub fn revoke_on_unauthorized(store: &impl SessionStore, status: u16) -> bool {
    if status != 401 {
        return false;
    }
    tracing::warn!("Received 401, clearing stored session");
    Session::clear(store);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            email: "admin@example.com".to_string(),
            full_name: "Ada Admin".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_load_without_token_is_none() {
        let store = MemoryStore::new();
        assert!(Session::load(&store).is_none());

        store.set(AUTH_TOKEN_KEY, "");
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_persist_then_load() {
        let store = MemoryStore::new();
        let session = Session::new("token-1", Some(profile()));
        session.persist(&store);

        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("token-1"));
        assert_eq!(Session::load(&store), Some(session));
    }

    #[test]
    fn test_corrupt_profile_keeps_token() {
        let store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, "token-2");
        store.set(USER_INFO_KEY, "{not json");

        let session = Session::load(&store).unwrap();
        assert_eq!(session.bearer(), "Bearer token-2");
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_persist_without_profile_drops_stale_profile() {
        let store = MemoryStore::new();
        Session::new("old", Some(profile())).persist(&store);
        Session::new("new", None).persist(&store);

        assert!(store.get(USER_INFO_KEY).is_none());
        assert_eq!(Session::load(&store).unwrap().bearer(), "Bearer new");
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = MemoryStore::new();
        Session::new("token-3", Some(profile())).persist(&store);
        assert_eq!(store.len(), 2);

        Session::clear(&store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_unauthorized_revokes_session() {
        let store = MemoryStore::new();
        Session::new("token", Some(profile())).persist(&store);

        assert!(revoke_on_unauthorized(&store, 401));
        assert!(Session::load(&store).is_none());
        assert!(store.get(USER_INFO_KEY).is_none());

        // A second 401 on an already cleared store still asks for the redirect.
        assert!(revoke_on_unauthorized(&store, 401));
    }

    #[test]
    fn test_rejected_login_without_session_redirects() {
        let store = MemoryStore::new();
        assert!(revoke_on_unauthorized(&store, 401));
        assert!(!revoke_on_unauthorized(&store, 422));
    }

    #[test]
    fn test_other_statuses_keep_session() {
        let store = MemoryStore::new();
        Session::new("token", None).persist(&store);
        for status in [200u16, 400, 403, 404, 500] {
            assert!(!revoke_on_unauthorized(&store, status));
        }
        assert!(Session::load(&store).is_some());
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(Session::new("abc", None).bearer(), "Bearer abc");
    }
}
