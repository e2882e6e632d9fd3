//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guarding, fetching, dialogs)
//! and delegates rendering details to `components`. Admin pages use the
//! strict API calls; portal pages use the non-raising portal calls.

pub mod admin_home;
pub mod assessments;
pub mod case_detail;
pub mod dpia;
pub mod dpo_home;
pub mod login;
pub mod portal;
pub mod users;
