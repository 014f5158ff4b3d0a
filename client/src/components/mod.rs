//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shop chrome and item surfaces while reading shared
//! session and toast state from Leptos context providers.

pub mod navbar;
pub mod sweet_card;
pub mod sweet_form;
pub mod toast_host;
