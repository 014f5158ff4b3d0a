//! Catalog (storefront) list state.
//!
//! DESIGN
//! ======
//! Owned by the home page that fetched it; nothing else mutates it. Purchases
//! are tracked per item so one in-flight purchase disables only that item's
//! button, while different items may be bought concurrently.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeSet;

use crate::net::types::{ApiError, Sweet, SweetId};
use crate::state::toast::ToastKind;

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub items: Vec<Sweet>,
    pub loading: bool,
    purchasing: BTreeSet<SweetId>,
}

impl CatalogState {
    /// State for a freshly mounted view, before the first fetch resolves.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Replace the list with a fetch result.
    pub fn load(&mut self, items: Vec<Sweet>) {
        self.items = items;
        self.loading = false;
    }

    /// Items matching `term`, in fetch order.
    pub fn visible(&self, term: &str) -> Vec<Sweet> {
        filter_sweets(&self.items, term)
    }

    pub fn is_purchasing(&self, id: &SweetId) -> bool {
        self.purchasing.contains(id)
    }

    pub fn find(&self, id: &SweetId) -> Option<&Sweet> {
        self.items.iter().find(|s| &s.id == id)
    }

    /// Mark a purchase as in flight. Returns `false` when the item is unknown,
    /// out of stock, or already being purchased.
    pub fn begin_purchase(&mut self, id: &SweetId) -> bool {
        if !self.find(id).is_some_and(Sweet::is_available) {
            return false;
        }
        self.purchasing.insert(id.clone())
    }

    /// Settle an in-flight purchase. Success decrements the local copy by one
    /// (never below zero); failure leaves the item untouched.
    pub fn finish_purchase(&mut self, id: &SweetId, succeeded: bool) {
        self.purchasing.remove(id);
        if !succeeded {
            return;
        }
        if let Some(sweet) = self.items.iter_mut().find(|s| &s.id == id) {
            sweet.quantity = sweet.quantity.saturating_sub(1);
        }
    }
}

/// Case-insensitive substring filter over name and description.
pub fn filter_sweets(items: &[Sweet], term: &str) -> Vec<Sweet> {
    items.iter().filter(|s| s.matches(term)).cloned().collect()
}

/// Toast for a settled purchase.
pub fn purchase_notice(name: &str, outcome: &Result<(), ApiError>) -> (ToastKind, String) {
    match outcome {
        Ok(()) => (ToastKind::Success, format!("Successfully purchased {name}!")),
        Err(e) => (ToastKind::Error, e.user_message("Purchase failed.")),
    }
}

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load sweets. Please try again later.";
