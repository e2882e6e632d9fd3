//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single outbound chokepoint (base URL, bearer attachment,
//! error normalization), `api` maps backend endpoints to typed calls, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod http;
pub mod types;
