//! Global Application State Store
//!
//! Render-facing snapshot of the quote session, using Leptos
//! reactive_stores for fine-grained reactivity. The session stays the
//! source of truth; this store is refreshed after every session change.

use leptos::prelude::*;
use quote_core::{Item, QuoteSession};
use reactive_stores::Store;

/// Snapshot of the session with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Quote being edited
    pub draft: Item,
    /// Whether the draft has been given an identifier
    pub draft_anchored: bool,
    /// Saved quotes in insertion order
    pub saved: Vec<Item>,
    /// An autosave is waiting for its quiet period
    pub autosave_pending: bool,
    /// Bumped when the draft is replaced (open, new, delete) so the form re-seeds its inputs
    pub form_epoch: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy the session's current state into the store
pub fn store_sync_session(store: &AppStore, session: &QuoteSession) {
    store.draft().set(session.draft());
    store.draft_anchored().set(session.is_draft_anchored());
    store.saved().set(session.list_saved());
    store.autosave_pending().set(session.is_autosave_pending());
}

/// Signal that the draft was replaced wholesale
pub fn store_bump_form_epoch(store: &AppStore) {
    store.form_epoch().update(|epoch| *epoch += 1);
}
