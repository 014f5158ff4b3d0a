//! View-lifetime cancellation for async work.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages fetch and mutate through `spawn_local` tasks that may still be
//! pending when the route changes. Every such await goes through
//! `ViewScope::guard`; closing the scope (on view cleanup) aborts pending
//! futures and makes any later `guard` resolve to `None`, so results are never
//! applied to a disposed view.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable};

#[derive(Debug, Default)]
struct ScopeInner {
    closed: bool,
    next_task: u64,
    pending: Vec<(u64, AbortHandle)>,
}

/// Cancellation scope tied to one mounted view.
#[derive(Clone, Debug, Default)]
pub struct ViewScope {
    inner: Arc<Mutex<ScopeInner>>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope closed automatically when the current reactive owner is cleaned up.
    pub fn for_view() -> Self {
        let scope = Self::new();
        let on_drop = scope.clone();
        leptos::prelude::on_cleanup(move || on_drop.close());
        scope
    }

    pub fn is_active(&self) -> bool {
        !self.lock().closed
    }

    /// Number of guarded futures still pending.
    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    /// Run `fut` unless the scope closes first.
    ///
    /// Returns `None` when the scope was already closed, was closed while
    /// `fut` was pending, or closed before the output could be handed back.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        let (handle, registration) = AbortHandle::new_pair();
        let task = {
            let mut inner = self.lock();
            if inner.closed {
                return None;
            }
            inner.next_task += 1;
            let task = inner.next_task;
            inner.pending.push((task, handle));
            task
        };

        let output = Abortable::new(fut, registration).await;

        let mut inner = self.lock();
        inner.pending.retain(|(id, _)| *id != task);
        if inner.closed {
            return None;
        }
        output.ok()
    }

    /// Abort everything pending and refuse new work.
    pub fn close(&self) {
        let pending = {
            let mut inner = self.lock();
            inner.closed = true;
            std::mem::take(&mut inner.pending)
        };
        for (_, handle) in pending {
            handle.abort();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScopeInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
