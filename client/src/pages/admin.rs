//! Admin inventory page: table with create, edit, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only admins stay on this route; `install_admin_guard` redirects everyone
//! else. The remote API enforces the same rule server-side. The table is
//! fetched once access is granted and owned by this view.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sweet_card::{format_price, stock_class};
use crate::components::sweet_form::SweetForm;
use crate::net::api::ApiClient;
use crate::net::types::{Sweet, SweetDraft, SweetId};
use crate::state::auth::AuthContext;
use crate::state::inventory::{EditorMode, InventoryState};
use crate::state::toast::Toasts;
use crate::util::auth::{AdminAccess, install_admin_guard};
use crate::util::scope::ViewScope;

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    install_admin_guard(auth, toasts, navigate);

    let inventory = RwSignal::new(InventoryState::loading());
    let scope = ViewScope::for_view();
    let granted = move || auth.state().with(AdminAccess::evaluate) == AdminAccess::Granted;

    let requested = RwSignal::new(false);
    let fetch_scope = scope.clone();
    Effect::new(move || {
        if !granted() || requested.get_untracked() {
            return;
        }
        requested.set(true);
        refresh(api, inventory, toasts, fetch_scope.clone());
    });

    let submit_scope = scope.clone();
    let on_submit = Callback::new(move |draft: SweetDraft| {
        let Some(mode) = inventory.with_untracked(|s| s.editor.clone()) else {
            return;
        };
        inventory.update(|s| s.saving = true);
        save(api, inventory, toasts, submit_scope.clone(), mode, draft);
    });
    let on_cancel = Callback::new(move |()| inventory.update(InventoryState::close_editor));

    let on_edit = Callback::new(move |sweet: Sweet| inventory.update(|s| s.open_edit(sweet)));
    let on_delete_request = Callback::new(move |id: SweetId| inventory.update(|s| s.request_delete(id)));
    let on_delete_cancel = Callback::new(move |()| inventory.update(InventoryState::cancel_delete));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = inventory.with_untracked(|s| s.pending_delete.clone()) else {
            return;
        };
        inventory.update(InventoryState::cancel_delete);
        delete(api, inventory, toasts, scope.clone(), id);
    });

    let saving = Signal::derive(move || inventory.with(|s| s.saving));

    view! {
        <Show
            when=granted
            fallback=|| view! { <p class="page-loading">"Checking access..."</p> }
        >
            <div class="admin-page">
                <header class="page-header">
                    <div>
                        <h1 class="page-header__title">"Admin Dashboard"</h1>
                        <p class="page-header__subtitle">"Manage your inventory"</p>
                    </div>
                    <button class="btn btn--primary" on:click=move |_| inventory.update(InventoryState::open_create)>
                        "+ Add Sweet"
                    </button>
                </header>

                <Show
                    when=move || !inventory.with(|s| s.loading)
                    fallback=|| view! { <p class="page-loading">"Loading inventory..."</p> }
                >
                    <table class="inventory-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Price"</th>
                                <th>"Quantity"</th>
                                <th class="inventory-table__actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let items = inventory.with(|s| s.items.clone());
                                if items.is_empty() {
                                    return view! {
                                        <tr>
                                            <td colspan="4" class="inventory-table__empty">
                                                "No sweets found. Click \"Add Sweet\" to create one."
                                            </td>
                                        </tr>
                                    }
                                        .into_any();
                                }
                                items
                                    .into_iter()
                                    .map(|sweet| {
                                        view! {
                                            <InventoryRow
                                                sweet=sweet
                                                on_edit=on_edit
                                                on_delete=on_delete_request
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                </Show>

                {move || {
                    inventory
                        .with(|s| s.editor.clone())
                        .map(|mode| {
                            view! {
                                <EditorDialog
                                    mode=mode
                                    saving=saving
                                    on_submit=on_submit
                                    on_cancel=on_cancel
                                />
                            }
                        })
                }}

                <Show when=move || inventory.with(|s| s.pending_delete.is_some())>
                    <DeleteSweetDialog
                        name=Signal::derive(move || {
                            inventory
                                .with(|s| {
                                    s.pending_delete.as_ref().and_then(|id| s.name_of(id)).map(str::to_owned)
                                })
                                .unwrap_or_default()
                        })
                        on_confirm=on_delete_confirm
                        on_cancel=on_delete_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn InventoryRow(sweet: Sweet, on_edit: Callback<Sweet>, on_delete: Callback<SweetId>) -> impl IntoView {
    let badge = format!("stock-badge {}", stock_class(sweet.stock_level()));
    let id = sweet.id.clone();
    let name = sweet.name.clone();
    let price = format_price(sweet.price);
    let quantity = sweet.quantity;

    view! {
        <tr>
            <td class="inventory-table__name">{name}</td>
            <td>{price}</td>
            <td>
                <span class=badge>{quantity}</span>
            </td>
            <td class="inventory-table__actions">
                <button class="btn btn--ghost" title="Edit" on:click=move |_| on_edit.run(sweet.clone())>
                    "Edit"
                </button>
                <button class="btn btn--danger" title="Delete" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Modal wrapping the add/edit form.
#[component]
fn EditorDialog(
    mode: EditorMode,
    saving: Signal<bool>,
    on_submit: Callback<SweetDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = mode.title();
    let submit_label = mode.submit_label();
    let initial = mode.initial().cloned();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_cancel.run(())>
                        "×"
                    </button>
                </div>
                <SweetForm
                    initial=initial
                    submit_label=submit_label
                    saving=saving
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
            </div>
        </div>
    }
}

#[component]
fn DeleteSweetDialog(name: Signal<String>, on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Sweet"</h2>
                <p class="dialog__danger">
                    "Are you sure you want to delete " <strong>{move || name.get()}</strong> "?"
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn refresh(api: ApiClient, inventory: RwSignal<InventoryState>, toasts: Toasts, scope: ViewScope) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(result) = scope.guard(api.list_sweets()).await else {
            return;
        };
        if let Err(e) = &result {
            log::error!("failed to fetch sweets: {e}");
        }
        let mut failure = None;
        inventory.update(|s| failure = s.settle_fetch(result));
        if let Some(message) = failure {
            toasts.error(message);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, inventory, toasts, scope);
    }
}

fn save(
    api: ApiClient,
    inventory: RwSignal<InventoryState>,
    toasts: Toasts,
    scope: ViewScope,
    mode: EditorMode,
    draft: SweetDraft,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let request = async {
            match &mode {
                EditorMode::Create => api.create_sweet(&draft).await,
                EditorMode::Edit(sweet) => api.update_sweet(&sweet.id, &draft).await,
            }
        };
        let Some(result) = scope.guard(request).await else {
            return;
        };
        if let Err(e) = &result {
            log::error!("save failed: {e}");
        }
        let mut outcome = None;
        inventory.update(|s| outcome = Some(s.settle_save(&mode, &draft, result.is_ok())));
        let Some(outcome) = outcome else {
            return;
        };
        toasts.push(outcome.kind, outcome.message);
        if outcome.refetch {
            refresh(api, inventory, toasts, scope);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, inventory, toasts, scope, mode, draft);
    }
}

fn delete(api: ApiClient, inventory: RwSignal<InventoryState>, toasts: Toasts, scope: ViewScope, id: SweetId) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(result) = scope.guard(api.delete_sweet(&id)).await else {
            return;
        };
        if let Err(e) = &result {
            log::error!("delete of {id} failed: {e}");
        }
        let mut notice = None;
        inventory.update(|s| notice = Some(s.settle_delete(&id, result.is_ok())));
        if let Some((kind, message)) = notice {
            toasts.push(kind, message);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, inventory, toasts, scope, id);
    }
}
