//! Networking modules for the remote storefront API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls with bearer-token injection and `types` defines
//! the wire schema shared by state and views.

pub mod api;
pub mod types;
