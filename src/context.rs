//! Application Context
//!
//! The quote session, provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use quote_core::{ItemField, QuoteSession};

use crate::store::{store_bump_form_epoch, AppStateStoreFields, AppStore};

/// App-wide handle to the session
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<QuoteSession, LocalStorage>,
    store: AppStore,
}

impl AppContext {
    pub fn new(session: QuoteSession, store: AppStore) -> Self {
        Self {
            session: StoredValue::new_local(session),
            store,
        }
    }

    /// Apply a form edit to the draft
    pub fn edit(&self, field: ItemField, value: String) {
        self.session.with_value(|session| session.edit_draft(field, &value));
    }

    /// Open a saved quote in the form
    pub fn open(&self, id: &str) {
        if self.session.with_value(|session| session.load_draft(id)) {
            store_bump_form_epoch(&self.store);
        }
    }

    /// Start a new quote
    pub fn new_quote(&self) {
        self.session.with_value(|session| session.reset_draft());
        store_bump_form_epoch(&self.store);
    }

    /// Delete a saved quote
    pub fn delete(&self, id: &str) {
        let was_draft = self.store.draft().with_untracked(|draft| draft.id == id);
        self.session.with_value(|session| session.delete_item(id));
        if was_draft {
            store_bump_form_epoch(&self.store);
        }
    }

    /// Manual save
    pub fn save_now(&self) {
        self.session.with_value(|session| session.save_now());
    }

    /// Write any pending autosave right away
    pub fn flush(&self) {
        self.session.with_value(|session| session.flush());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
