//! Browser localStorage helpers for UI preferences and drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write glue so pages and components persist
//! toggles and input drafts without repeating web-sys plumbing. Reads never
//! fail outward; a missing or unreadable value falls back to the default.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the sidebar collapse preference.
pub const SIDEBAR_KEY: &str = "pdpl.sidebarCollapsed";

/// Encode a boolean preference the way the backend-adjacent tooling expects.
pub fn encode_flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Decode a stored flag; anything but `"1"` reads as false.
pub fn decode_flag(raw: &str) -> bool {
    raw == "1"
}

/// Read the persisted sidebar collapse preference.
pub fn sidebar_collapsed() -> bool {
    #[cfg(feature = "hydrate")]
    {
        read_item(SIDEBAR_KEY).is_some_and(|raw| decode_flag(&raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Persist the sidebar collapse preference.
pub fn set_sidebar_collapsed(collapsed: bool) {
    #[cfg(feature = "hydrate")]
    {
        write_item(SIDEBAR_KEY, encode_flag(collapsed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = collapsed;
    }
}

/// Load a JSON value from localStorage for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = read_item(key)?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to localStorage for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        write_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a stored value.
pub fn remove(key: &str) {
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

#[cfg(feature = "hydrate")]
fn read_item(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn write_item(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, value);
    }
}
