//! Quote Form Component
//!
//! Inputs for the draft quote. Every input event goes straight to the
//! session, which coerces the value and restarts the autosave timer.

use leptos::prelude::*;
use quote_core::{Item, ItemField, ProfitRate};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Cost inputs, in display order
const AMOUNT_FIELDS: &[(ItemField, &str)] = &[
    (ItemField::Quantity, "Quantity"),
    (ItemField::UnitPrice, "Price per item"),
    (ItemField::SetupFee, "Setup fee"),
    (ItemField::Shipping, "Shipping"),
];

fn amount_of(item: &Item, field: ItemField) -> f64 {
    match field {
        ItemField::Quantity => item.quantity,
        ItemField::UnitPrice => item.unit_price,
        ItemField::SetupFee => item.setup_fee,
        ItemField::Shipping => item.shipping,
        ItemField::Name | ItemField::ProfitRate => 0.0,
    }
}

/// Draft editor
///
/// Inputs are seeded from the draft and re-seeded only when the draft is
/// replaced, so coercion never rewrites what the user is typing.
#[component]
pub fn QuoteForm() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="quote-form">
            {move || {
                store.form_epoch().track();
                let draft = store.draft().get_untracked();
                view! { <DraftFields draft=draft /> }
            }}
        </div>
    }
}

#[component]
fn DraftFields(draft: Item) -> impl IntoView {
    let ctx = use_app_context();
    let selected_rate = draft.profit_rate;

    view! {
        <label class="field">
            <span class="field-label">"Name"</span>
            <input
                type="text"
                value=draft.name.clone()
                placeholder="Untitled"
                on:input=move |ev| ctx.edit(ItemField::Name, event_target_value(&ev))
            />
        </label>

        {AMOUNT_FIELDS.iter().map(|&(field, label)| {
            let initial = amount_of(&draft, field).to_string();
            view! {
                <label class="field">
                    <span class="field-label">{label}</span>
                    <input
                        type="number"
                        min="0"
                        step="any"
                        value=initial
                        on:input=move |ev| ctx.edit(field, event_target_value(&ev))
                    />
                </label>
            }
        }).collect_view()}

        <label class="field">
            <span class="field-label">"Profit"</span>
            <select on:change=move |ev| ctx.edit(ItemField::ProfitRate, event_target_value(&ev))>
                {ProfitRate::ALL.iter().map(|rate| {
                    let value = rate.as_fraction().to_string();
                    let selected = *rate == selected_rate;
                    view! {
                        <option value=value selected=selected>
                            {rate.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
