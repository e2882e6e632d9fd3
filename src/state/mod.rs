//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` persists the token and cached user across reloads, `auth` holds
//! the live server-validated identity, `ui` keeps chrome toggles, and `dpia`
//! models the wizard draft. Pages and components read these via context
//! signals provided by the root `App`.

pub mod auth;
pub mod dpia;
pub mod session;
pub mod ui;
