//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::net::api::ApiClient;
use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthContext;
use crate::state::toast::Toasts;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client, toasts, and the session service, then mounts the
/// routes. Route content waits for the session to be read from storage.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::default();
    provide_context(api);
    provide_context(Toasts::new());
    AuthContext::provide(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/sweetshop.css"/>
        <Title text="SweetShop"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <SessionReady><HomePage/></SessionReady> }/>
                    <Route path=StaticSegment("login") view=|| view! { <SessionReady><LoginPage/></SessionReady> }/>
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <SessionReady><RegisterPage/></SessionReady> }
                    />
                    <Route path=StaticSegment("admin") view=|| view! { <SessionReady><AdminPage/></SessionReady> }/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}

/// Hold route content back until the session has been reconciled, so views
/// never act on the pre-storage logged-out default.
#[component]
fn SessionReady(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <Show
            when=move || !auth.loading()
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            {children()}
        </Show>
    }
}
