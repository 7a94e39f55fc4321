//! Saved Quotes Component
//!
//! List of saved quotes with their totals. Clicking a name opens the quote;
//! deleting asks again with the quote's name and total.

use leptos::prelude::*;
use quote_core::{compute_totals, Item, Totals};

use super::totals_panel::format_amount;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Confirmation text shown before a saved quote is deleted
fn delete_prompt(item: &Item) -> String {
    format!(
        "Delete \"{}\" ({})?",
        item.name.trim(),
        format_amount(compute_totals(item).total)
    )
}

/// Footer line summarising the whole list
fn list_summary(saved: &[Item]) -> String {
    let noun = if saved.len() == 1 { "quote" } else { "quotes" };
    let total = Totals::of_collection(saved).total;
    format!("{} {}, {} total", saved.len(), noun, format_amount(total))
}

#[component]
pub fn SavedQuotes() -> impl IntoView {
    let store = use_app_store();

    view! {
        <aside class="saved-quotes">
            <h2>"Saved quotes"</h2>
            <ul class="saved-list">
                {move || {
                    let current = store.draft().with(|draft| draft.id.clone());
                    store
                        .saved()
                        .get()
                        .into_iter()
                        .map(|item| {
                            let is_current = !item.id.is_empty() && item.id == current;
                            view! { <SavedQuoteRow item=item is_current=is_current /> }
                        })
                        .collect_view()
                }}
            </ul>
            <p class="saved-summary">{move || store.saved().with(|saved| list_summary(saved))}</p>
        </aside>
    }
}

/// One saved quote: open on click, two-step delete
#[component]
fn SavedQuoteRow(item: Item, is_current: bool) -> impl IntoView {
    let ctx = use_app_context();
    let (confirming, set_confirming) = signal(false);

    let row_class = if is_current { "saved-row active" } else { "saved-row" };
    let prompt = delete_prompt(&item);
    let total = format_amount(compute_totals(&item).total);
    let open_id = item.id.clone();
    let delete_id = item.id.clone();
    let name = item.name;

    view! {
        <li class=row_class>
            <Show
                when=move || confirming.get()
                fallback=move || {
                    let open_id = open_id.clone();
                    view! {
                        <button class="open-btn" on:click=move |_| ctx.open(&open_id)>
                            {name.clone()}
                        </button>
                        <span class="saved-total">{total.clone()}</span>
                        <button
                            type="button"
                            class="delete-btn"
                            on:click=move |_| set_confirming.set(true)
                        >
                            "×"
                        </button>
                    }
                }
            >
                <span class="delete-confirm">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click={
                        let delete_id = delete_id.clone();
                        move |_| ctx.delete(&delete_id)
                    }
                >
                    "Delete"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| set_confirming.set(false)
                >
                    "Keep"
                </button>
            </Show>
        </li>
    }
}
