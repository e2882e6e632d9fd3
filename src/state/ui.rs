//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so rendering
//! controls can evolve independently of wire data. The sidebar preference is
//! seeded from and written back to `util::prefs`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for console chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Whether the admin sidebar is collapsed to icons only.
    pub sidebar_collapsed: bool,
}

impl UiState {
    /// Restore chrome state from persisted preferences.
    pub fn restored() -> Self {
        Self { sidebar_collapsed: crate::util::prefs::sidebar_collapsed() }
    }
}
