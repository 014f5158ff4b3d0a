//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, `inventory`, `toast`) so each
//! view depends on a small focused model. Only `auth` and `toast` are
//! app-wide; list state belongs to the page that fetched it.

pub mod auth;
pub mod catalog;
pub mod inventory;
pub mod toast;
