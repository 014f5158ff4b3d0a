//! Add/edit form for inventory items, rendered inside the admin modal.

use leptos::prelude::*;

use crate::net::types::{Sweet, SweetDraft};
use crate::util::validation::{
    FIELD_DESCRIPTION, FIELD_NAME, FIELD_PRICE, FIELD_QUANTITY, FieldErrors, SweetForm as SweetFormDraft, field_error,
    validate_sweet,
};

#[component]
pub fn SweetForm(
    initial: Option<Sweet>,
    submit_label: &'static str,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<SweetDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = SweetFormDraft::from_sweet(initial.as_ref());
    let name = RwSignal::new(draft.name);
    let description = RwSignal::new(draft.description);
    let price = RwSignal::new(draft.price);
    let quantity = RwSignal::new(draft.quantity);
    let image_url = RwSignal::new(draft.image_url);
    let errors = RwSignal::new(FieldErrors::new());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let form = SweetFormDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
            quantity: quantity.get_untracked(),
            image_url: image_url.get_untracked(),
        };
        match validate_sweet(&form) {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                on_submit.run(payload);
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    let error_for = move |field: &'static str| move || errors.with(|e| field_error(e, field));

    view! {
        <form class="sweet-form" on:submit=on_form_submit novalidate=true>
            <label class="dialog__label">
                "Sweet Name"
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="e.g. Chocolate Fudge"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <FieldError message=Signal::derive(error_for(FIELD_NAME))/>

            <label class="dialog__label">
                "Description"
                <textarea
                    class="dialog__input"
                    rows="3"
                    placeholder="Describe the sweet..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <FieldError message=Signal::derive(error_for(FIELD_DESCRIPTION))/>

            <div class="sweet-form__row">
                <div>
                    <label class="dialog__label">
                        "Price (₹)"
                        <input
                            class="dialog__input"
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(error_for(FIELD_PRICE))/>
                </div>
                <div>
                    <label class="dialog__label">
                        "Quantity"
                        <input
                            class="dialog__input"
                            type="number"
                            step="1"
                            min="0"
                            placeholder="0"
                            prop:value=move || quantity.get()
                            on:input=move |ev| quantity.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(error_for(FIELD_QUANTITY))/>
                </div>
            </div>

            <label class="dialog__label">
                "Image URL"
                <input
                    class="dialog__input"
                    type="url"
                    placeholder="https://example.com/image.jpg"
                    prop:value=move || image_url.get()
                    on:input=move |ev| image_url.set(event_target_value(&ev))
                />
            </label>

            <div class="dialog__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { submit_label }}
                </button>
            </div>
        </form>
    }
}

/// Inline validation message under a field.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
