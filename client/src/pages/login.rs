//! Login page: username + password against the remote auth endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sweet_form::FieldError;
use crate::net::types::ApiError;
use crate::state::auth::AuthContext;
use crate::state::toast::Toasts;
use crate::util::auth::install_authed_redirect;
use crate::util::scope::ViewScope;
use crate::util::validation::{FIELD_PASSWORD, FIELD_USERNAME, FieldErrors, LoginForm, field_error, validate_login};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Toast text for a rejected login.
pub fn login_failure_message(error: &ApiError) -> String {
    error.user_message(LOGIN_FAILED_MESSAGE)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    let scope = ViewScope::for_view();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { username: username.get_untracked(), password: password.get_untracked() };
        let credentials = match validate_login(&form) {
            Ok(credentials) => credentials,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let scope = scope.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let Some(result) = scope.guard(auth.login(credentials)).await else {
                    return;
                };
                busy.set(false);
                match result {
                    Ok(_) => {
                        toasts.success(LOGIN_SUCCESS_MESSAGE);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        toasts.error(login_failure_message(&e));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &scope, &navigate, toasts);
        }
    };

    let error_for = move |field: &'static str| Signal::derive(move || errors.with(|e| field_error(e, field)));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="dialog__label">
                        "Username"
                        <input
                            class="dialog__input"
                            type="text"
                            autocomplete="username"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=error_for(FIELD_USERNAME)/>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=error_for(FIELD_PASSWORD)/>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
