//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let username = move || auth.user().map(|u| u.username).unwrap_or_default();
    let logged_in = move || auth.state().with(|s| s.is_logged_in());

    let on_logout = move |_| {
        auth.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                <span aria-hidden="true">"🍬"</span>
                "SweetShop"
            </a>
            <span class="navbar__spacer"></span>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <a href="/login" class="navbar__link">"Login"</a>
                        <a href="/register" class="btn btn--primary navbar__link">"Register"</a>
                    }
                }
            >
                <span class="navbar__welcome">"Welcome, " {username}</span>
                <Show when=move || auth.is_admin()>
                    <a href="/admin" class="navbar__link">"Admin"</a>
                </Show>
                <button class="btn navbar__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
