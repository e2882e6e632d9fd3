use super::*;

#[test]
fn ui_state_default_sidebar_expanded() {
    let state = UiState::default();
    assert!(!state.sidebar_collapsed);
}

#[test]
fn restored_without_browser_storage_matches_default() {
    let state = UiState::restored();
    assert!(!state.sidebar_collapsed);
}
