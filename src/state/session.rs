//! Persisted session: bearer token plus a cached user snapshot.
//!
//! DESIGN
//! ======
//! The store is a plain key-value layer over browser `localStorage`, generic
//! over a `SessionBackend` so the logic runs against an in-memory backend in
//! unit tests. The cached user is a rendering hint only: the auth layer
//! revalidates the token against the backend before any access decision.
//!
//! Stored values never fail outward. A missing or corrupt entry reads as
//! absent, and a failed write keeps the previous value.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "pdpl_token";
/// Storage key for the cached user envelope.
pub const USER_KEY: &str = "pdpl_user";
/// Version tag written into the user envelope; bump when `User` changes shape
/// so stale snapshots read as absent instead of mis-deserializing.
pub const USER_SCHEMA_VERSION: u32 = 1;

/// Minimal key-value surface the session store needs.
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    /// Returns false when the value could not be persisted.
    fn write(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str);
}

/// Versioned envelope wrapped around the persisted user snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredUser {
    v: u32,
    user: User,
}

/// Session store over an arbitrary backend.
pub struct SessionStore<B: SessionBackend> {
    backend: B,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Stored token, or the empty string when absent or unreadable.
    pub fn token(&self) -> String {
        self.backend.read(TOKEN_KEY).unwrap_or_default()
    }

    /// Deserialized cached user, or `None` on missing, corrupt, or
    /// wrong-version data.
    pub fn cached_user(&self) -> Option<User> {
        let raw = self.backend.read(USER_KEY)?;
        let envelope: StoredUser = serde_json::from_str(&raw).ok()?;
        (envelope.v == USER_SCHEMA_VERSION).then_some(envelope.user)
    }

    /// Persist token and user together. Serialization or storage failures
    /// leave the previous session in place.
    pub fn save(&self, token: &str, user: &User) {
        let envelope = StoredUser { v: USER_SCHEMA_VERSION, user: user.clone() };
        let Ok(raw) = serde_json::to_string(&envelope) else {
            return;
        };
        if self.backend.write(TOKEN_KEY, token) {
            let _ = self.backend.write(USER_KEY, &raw);
        }
    }

    /// Remove both keys. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        self.backend.delete(TOKEN_KEY);
        self.backend.delete(USER_KEY);
    }
}

/// Browser `localStorage` backend. Outside the browser every read is absent
/// and every write fails quietly.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionBackend for BrowserSession {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return false;
            };
            storage.set_item(key, value).is_ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            false
        }
    }

    fn delete(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

fn browser_store() -> SessionStore<BrowserSession> {
    SessionStore::new(BrowserSession)
}

/// Stored token for the running browser session.
pub fn token() -> String {
    browser_store().token()
}

/// Cached user snapshot for the running browser session.
pub fn cached_user() -> Option<User> {
    browser_store().cached_user()
}

/// Persist the running browser session.
pub fn save(token: &str, user: &User) {
    browser_store().save(token, user);
}

/// Clear the running browser session.
pub fn clear() {
    browser_store().clear();
}
