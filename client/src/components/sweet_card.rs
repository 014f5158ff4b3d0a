//! Catalog card for a single item with its purchase button.
//!
//! DESIGN
//! ======
//! The card is stateless: the owning page passes the item, the per-item
//! `purchasing` flag, and a purchase callback keyed by id.

#[cfg(test)]
#[path = "sweet_card_test.rs"]
mod sweet_card_test;

use leptos::prelude::*;

use crate::net::types::{StockLevel, Sweet, SweetId};

/// Display price with two decimals.
pub fn format_price(price: f64) -> String {
    format!("₹{price:.2}")
}

/// Footer stock text.
pub fn stock_label(quantity: u32) -> String {
    if quantity == 0 {
        "Unavailable".to_owned()
    } else {
        format!("{quantity} left")
    }
}

/// CSS modifier for a stock bucket, shared with the admin table badges.
pub fn stock_class(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Out => "stock--out",
        StockLevel::Low => "stock--low",
        StockLevel::Plenty => "stock--ok",
    }
}

#[component]
pub fn SweetCard(sweet: Sweet, purchasing: bool, on_purchase: Callback<SweetId>) -> impl IntoView {
    let out_of_stock = !sweet.is_available();
    let disabled = out_of_stock || purchasing;
    let stock_classes = format!("sweet-card__stock {}", stock_class(sweet.stock_level()));
    let id = sweet.id.clone();
    let name = sweet.name.clone();

    view! {
        <div class="sweet-card">
            <div class="sweet-card__media">
                {match sweet.image_url.clone() {
                    Some(src) => view! { <img class="sweet-card__image" src=src alt=name.clone()/> }.into_any(),
                    None => view! { <span class="sweet-card__placeholder" aria-hidden="true">"🍬"</span> }.into_any(),
                }}
                <Show when=move || out_of_stock>
                    <div class="sweet-card__overlay">"Out of Stock"</div>
                </Show>
            </div>
            <div class="sweet-card__body">
                <div class="sweet-card__heading">
                    <h3 class="sweet-card__name" title=name.clone()>{name.clone()}</h3>
                    <span class="sweet-card__price">{format_price(sweet.price)}</span>
                </div>
                <p class="sweet-card__description">{sweet.description.clone()}</p>
                <div class="sweet-card__footer">
                    <span class=stock_classes>{stock_label(sweet.quantity)}</span>
                    <button
                        class="btn btn--primary sweet-card__buy"
                        disabled=disabled
                        on:click=move |_| on_purchase.run(id.clone())
                    >
                        {if purchasing { "Purchasing..." } else { "Purchase" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
