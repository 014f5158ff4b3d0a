//! Catalog page: searchable grid of items with per-item purchase.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public landing route. The list is fetched once on mount and owned by this
//! view; purchases decrement the local copy instead of re-fetching.

use leptos::prelude::*;

use crate::components::sweet_card::SweetCard;
use crate::net::api::ApiClient;
use crate::net::types::SweetId;
use crate::state::catalog::CatalogState;
use crate::state::toast::Toasts;
use crate::util::scope::ViewScope;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<Toasts>();
    let catalog = RwSignal::new(CatalogState::loading());
    let search = RwSignal::new(String::new());
    let scope = ViewScope::for_view();

    #[cfg(feature = "hydrate")]
    {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let Some(result) = scope.guard(api.list_sweets()).await else {
                return;
            };
            match result {
                Ok(items) => catalog.update(|c| c.load(items)),
                Err(e) => {
                    log::error!("failed to fetch sweets: {e}");
                    toasts.error(crate::state::catalog::LOAD_FAILED_MESSAGE);
                    catalog.update(|c| c.loading = false);
                }
            }
        });
    }

    let on_purchase = Callback::new(move |id: SweetId| {
        let mut started = false;
        catalog.update(|c| started = c.begin_purchase(&id));
        if !started {
            return;
        }
        let name = catalog
            .with_untracked(|c| c.find(&id).map(|s| s.name.clone()))
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            let scope = scope.clone();
            leptos::task::spawn_local(async move {
                let Some(outcome) = scope.guard(api.purchase_sweet(&id)).await else {
                    return;
                };
                if let Err(e) = &outcome {
                    log::warn!("purchase of {id} failed: {e}");
                }
                catalog.update(|c| c.finish_purchase(&id, outcome.is_ok()));
                let (kind, message) = crate::state::catalog::purchase_notice(&name, &outcome);
                toasts.push(kind, message);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, &scope, api, toasts);
        }
    });

    view! {
        <div class="catalog-page">
            <header class="page-header">
                <div>
                    <h1 class="page-header__title">"Our Sweets"</h1>
                    <p class="page-header__subtitle">"Explore our delicious collection"</p>
                </div>
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search sweets..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>

            <Show
                when=move || !catalog.with(|c| c.loading)
                fallback=|| view! { <p class="page-loading">"Loading sweets..."</p> }
            >
                {move || {
                    let term = search.get();
                    catalog
                        .with(|c| {
                            let visible = c.visible(&term);
                            if visible.is_empty() {
                                return view! {
                                    <div class="empty-state">
                                        <h3>"No sweets found"</h3>
                                        <p>"No sweets match your search criteria."</p>
                                    </div>
                                }
                                    .into_any();
                            }
                            let cards = visible
                                .into_iter()
                                .map(|sweet| {
                                    let purchasing = c.is_purchasing(&sweet.id);
                                    view! { <SweetCard sweet=sweet purchasing=purchasing on_purchase=on_purchase/> }
                                })
                                .collect::<Vec<_>>();
                            view! { <div class="catalog-grid">{cards}</div> }.into_any()
                        })
                }}
            </Show>
        </div>
    }
}
