//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` owns the persisted `token`/`user` pair and is the only code
//! that writes it. `AuthContext` wraps a store plus a reactive `AuthState` and
//! is provided once at the app root so route guards, the navbar, and auth
//! pages share one session.
//!
//! LIFECYCLE
//! =========
//! The context starts in a loading phase. Once mounted in the browser it
//! reconciles synchronously from storage (logged-in only when both keys are
//! present and the user record parses) and clears `loading`. Dependent UI
//! stays suppressed until then.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, AuthApi};
use crate::net::types::{ApiError, Credentials, RegisterResponse, User};
use crate::util::storage::{LocalStorage, SessionStorage, TOKEN_KEY, USER_KEY, load_json, save_json};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before storage has been reconciled.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// A restored or freshly created session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Failure of the register-then-login flow, tagged by the step that failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("registration failed: {0}")]
    Register(ApiError),
    #[error("automatic login failed: {0}")]
    Login(ApiError),
}

impl SignupError {
    /// Toast text for the failed step.
    pub fn user_message(&self) -> String {
        match self {
            Self::Register(e) => e.user_message("Registration failed."),
            Self::Login(e) => e.user_message("Registration succeeded, but automatic login failed. Please sign in."),
        }
    }
}

/// Persisted session owner.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Rebuild the session from storage without touching the network.
    ///
    /// Both keys must be present; a token without a parseable user (or the
    /// reverse) reads as logged-out.
    pub fn restore(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let user = load_json::<S, User>(&self.storage, USER_KEY)?;
        Some(Session { token, user })
    }

    /// Log in and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Propagates the API failure; storage is left untouched in that case.
    pub async fn login<A: AuthApi>(&self, api: &A, credentials: &Credentials) -> Result<User, ApiError> {
        let response = api.login(credentials).await?;
        let (token, user) = response.into_session(&credentials.username);
        self.persist(&token, &user);
        Ok(user)
    }

    /// Register an account. Does not change session state.
    ///
    /// # Errors
    ///
    /// Propagates the API failure.
    pub async fn register<A: AuthApi>(&self, api: &A, credentials: &Credentials) -> Result<RegisterResponse, ApiError> {
        api.register(credentials).await
    }

    /// Register, then log in with the same credentials.
    ///
    /// # Errors
    ///
    /// Returns the failing step; a login failure after a successful register
    /// leaves the session logged-out.
    pub async fn register_and_login<A: AuthApi>(&self, api: &A, credentials: &Credentials) -> Result<User, SignupError> {
        self.register(api, credentials).await.map_err(SignupError::Register)?;
        self.login(api, credentials).await.map_err(SignupError::Login)
    }

    /// Drop the persisted session. Local only; no server call.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    fn persist(&self, token: &str, user: &User) {
        self.storage.set(TOKEN_KEY, token);
        save_json(&self.storage, USER_KEY, user);
    }
}

/// Session service provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: SessionStore<LocalStorage>,
    api: ApiClient,
}

impl AuthContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: RwSignal::new(AuthState::pending()),
            store: SessionStore::new(LocalStorage),
            api,
        }
    }

    /// Create the context, provide it, and schedule storage reconciliation
    /// for when the app mounts in the browser.
    pub fn provide(api: ApiClient) -> Self {
        let auth = Self::new(api);
        provide_context(auth);
        Effect::new(move || auth.reconcile());
        auth
    }

    /// Load the session from storage and leave the loading phase.
    pub fn reconcile(&self) {
        let user = self.store.restore().map(|s| s.user);
        self.state.set(AuthState { user, loading: false });
    }

    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(AuthState::is_admin)
    }

    /// # Errors
    ///
    /// Propagates the login failure; session stays logged-out.
    pub async fn login(self, credentials: Credentials) -> Result<User, ApiError> {
        let user = self.store.login(&self.api, &credentials).await?;
        self.state.update(|s| s.user = Some(user.clone()));
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns which step failed.
    pub async fn register_and_login(self, credentials: Credentials) -> Result<User, SignupError> {
        let user = self.store.register_and_login(&self.api, &credentials).await?;
        self.state.update(|s| s.user = Some(user.clone()));
        Ok(user)
    }

    pub fn logout(&self) {
        self.store.logout();
        self.state.update(|s| s.user = None);
    }
}
