//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and shared widgets while reading shared
//! state from Leptos context providers. Route-level orchestration stays in
//! `pages`.

pub mod error_banner;
pub mod guard;
pub mod loading_panel;
pub mod missing_feature;
pub mod risk_heatmap;
pub mod shell;
pub mod sidebar;
pub mod stat_card;
pub mod topbar;
pub mod trend_line;
