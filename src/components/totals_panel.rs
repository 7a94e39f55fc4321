//! Totals Panel Component
//!
//! Live subtotal, profit and total for the draft.

use leptos::prelude::*;
use quote_core::compute_totals;

use crate::store::{use_app_store, AppStateStoreFields};

/// Plain two-decimal rendering of an amount
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[component]
pub fn TotalsPanel() -> impl IntoView {
    let store = use_app_store();
    let totals = move || store.draft().with(compute_totals);

    view! {
        <dl class="totals-panel">
            <dt>"Subtotal"</dt>
            <dd>{move || format_amount(totals().subtotal)}</dd>
            <dt>"Profit"</dt>
            <dd>{move || format_amount(totals().profit)}</dd>
            <dt class="total">"Total"</dt>
            <dd class="total">{move || format_amount(totals().total)}</dd>
        </dl>
    }
}
