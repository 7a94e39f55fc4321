//! Quote Toolbar Component
//!
//! New quote, manual save and the autosave status line.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn QuoteToolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let status_class = move || {
        if store.autosave_pending().get() {
            "save-status pending"
        } else {
            "save-status"
        }
    };

    let status = move || {
        if store.autosave_pending().get() {
            "Unsaved changes…"
        } else if store.draft_anchored().get() {
            "All changes saved"
        } else {
            "New quote"
        }
    };

    view! {
        <div class="quote-toolbar">
            <button type="button" class="new-btn" on:click=move |_| ctx.new_quote()>
                "New quote"
            </button>
            <button type="button" class="save-btn" on:click=move |_| ctx.save_now()>
                "Save"
            </button>
            <span class=status_class>{status}</span>
        </div>
    }
}
