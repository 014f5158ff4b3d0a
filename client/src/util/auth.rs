//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical access redirects. Role checks here
//! are client-side only; the remote API still enforces authorization.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthContext, AuthState};
use crate::state::toast::Toasts;

pub const ADMIN_DENIED_MESSAGE: &str = "Access denied. Admin only area.";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in as an administrator.";

/// Outcome of checking the session against an admin-only route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAccess {
    /// Session not reconciled yet; render nothing and decide later.
    Pending,
    Granted,
    /// Logged-out visitor: send to `/login`.
    LoginRequired,
    /// Logged-in non-admin: send to the catalog.
    Denied,
}

impl AdminAccess {
    pub fn evaluate(state: &AuthState) -> Self {
        if state.loading {
            return Self::Pending;
        }
        match &state.user {
            None => Self::LoginRequired,
            Some(user) if user.is_admin() => Self::Granted,
            Some(_) => Self::Denied,
        }
    }

    /// Redirect target and toast text for a refused visit.
    pub fn redirect(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::LoginRequired => Some(("/login", LOGIN_REQUIRED_MESSAGE)),
            Self::Denied => Some(("/", ADMIN_DENIED_MESSAGE)),
            Self::Pending | Self::Granted => None,
        }
    }
}

/// Redirect away whenever the session does not qualify for an admin-only
/// route. Refused visits get a toast; an admin who logs out on the page is
/// just redirected.
pub fn install_admin_guard<F>(auth: AuthContext, toasts: Toasts, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let granted = StoredValue::new(false);
    Effect::new(move || {
        let access = auth.state().with(AdminAccess::evaluate);
        if access == AdminAccess::Granted {
            granted.set_value(true);
            return;
        }
        let Some((target, message)) = access.redirect() else {
            return;
        };
        if !granted.get_value() {
            toasts.error(message);
        }
        navigate(target, NavigateOptions::default());
    });
}

/// Send already-authenticated visitors away from login/register.
pub fn install_authed_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.state().get();
        if !state.loading && state.is_logged_in() {
            navigate("/", NavigateOptions::default());
        }
    });
}
