//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, task
//! lifetimes) and pure rules (validation, access) from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod scope;
pub mod storage;
pub mod validation;
