//! Registration page: sign up, then log in with the same credentials.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sweet_form::FieldError;
use crate::state::auth::{AuthContext, SignupError};
use crate::state::toast::{ToastKind, Toasts};
use crate::util::auth::install_authed_redirect;
use crate::util::scope::ViewScope;
use crate::util::validation::{
    FIELD_CONFIRM_PASSWORD, FIELD_PASSWORD, FIELD_USERNAME, FieldErrors, RegisterForm, field_error, validate_register,
};

pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Logging you in...";

/// Toast text for a failed signup. Either step failing keeps the visitor on
/// this page.
pub fn signup_failure_message(error: &SignupError) -> String {
    error.user_message()
}

/// Toasts for a settled signup, in display order. The account exists once
/// the register step succeeds, so that is announced even when the automatic
/// login afterwards fails.
pub fn signup_notices<T>(outcome: &Result<T, SignupError>) -> Vec<(ToastKind, String)> {
    match outcome {
        Ok(_) => vec![(ToastKind::Success, REGISTER_SUCCESS_MESSAGE.to_owned())],
        Err(e @ SignupError::Login(_)) => vec![
            (ToastKind::Success, REGISTER_SUCCESS_MESSAGE.to_owned()),
            (ToastKind::Error, signup_failure_message(e)),
        ],
        Err(e @ SignupError::Register(_)) => vec![(ToastKind::Error, signup_failure_message(e))],
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    let scope = ViewScope::for_view();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let credentials = match validate_register(&form) {
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
                let Some(result) = scope.guard(auth.register_and_login(credentials)).await else {
                    return;
                };
                busy.set(false);
                if let Err(e) = &result {
                    log::warn!("signup failed: {e}");
                }
                for (kind, message) in signup_notices(&result) {
                    toasts.push(kind, message);
                }
                if result.is_ok() {
                    navigate("/", leptos_router::NavigateOptions::default());
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
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join SweetShop today"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="dialog__label">
                        "Username"
                        <input
                            class="dialog__input"
                            type="text"
                            autocomplete="username"
                            placeholder="Choose a username"
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
                            autocomplete="new-password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=error_for(FIELD_PASSWORD)/>
                    <label class="dialog__label">
                        "Confirm Password"
                        <input
                            class="dialog__input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="••••••••"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=error_for(FIELD_CONFIRM_PASSWORD)/>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
