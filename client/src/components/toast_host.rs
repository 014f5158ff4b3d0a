//! Fixed stack of toast notifications.

use leptos::prelude::*;

use crate::state::toast::Toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.state().with(|s| s.items.clone())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.css_modifier());
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id) title="Dismiss">
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
