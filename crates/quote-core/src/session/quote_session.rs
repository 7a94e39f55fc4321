//! Quote Session
//!
//! Facade over one draft, the saved collection and the autosave timer.
//! This is the whole surface the UI talks to.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::autosave::{AutosaveScheduler, Ticket};
use super::draft::Draft;
use super::timer::Timer;
use crate::config::SessionConfig;
use crate::domain::{Item, ItemField};
use crate::ids::IdGenerator;
use crate::repository::{ItemStore, Repository, StorageMedium};

type Listener = Rc<dyn Fn(&QuoteSession)>;

struct SessionState {
    draft: Draft,
    store: ItemStore<Box<dyn StorageMedium>>,
    autosave: AutosaveScheduler,
    ids: Box<dyn IdGenerator>,
    listener: Option<Listener>,
}

impl SessionState {
    /// Upsert the current draft unless it is blank; returns whether it was stored
    fn persist_draft(&mut self) -> bool {
        if self.draft.is_blank() {
            log::debug!("Draft is blank, nothing saved");
            return false;
        }

        match self.store.upsert(self.draft.item().clone(), self.ids.as_ref()) {
            Ok(stored) => log::info!("Saved quote '{}' ({})", stored.name, stored.id),
            Err(e) => log::error!("Failed to persist quotes: {}", e),
        }
        true
    }
}

/// A single-user quoting session
///
/// Cheap to clone; clones share the same state. Timer callbacks only hold
/// a weak reference, so dropping the last clone cancels any pending write.
#[derive(Clone)]
pub struct QuoteSession {
    inner: Rc<RefCell<SessionState>>,
}

impl QuoteSession {
    /// Open a session: load saved quotes and start with a fresh draft
    pub fn new(
        config: &SessionConfig,
        medium: impl StorageMedium + 'static,
        timer: impl Timer + 'static,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        let medium: Box<dyn StorageMedium> = Box::new(medium);
        let mut store = ItemStore::new(medium, config.storage_key.clone());
        store.load(&ids);
        log::info!("Opened quote session with {} saved quotes", store.list().len());

        let mut autosave = AutosaveScheduler::new(Box::new(timer), config.quiet_period());
        autosave.observe_mount();

        Self {
            inner: Rc::new(RefCell::new(SessionState {
                draft: Draft::new(),
                store,
                autosave,
                ids: Box::new(ids),
                listener: None,
            })),
        }
    }

    /// Register the callback run after every draft change or store write
    pub fn set_listener(&self, listener: impl Fn(&QuoteSession) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn draft(&self) -> Item {
        self.inner.borrow().draft.item().clone()
    }

    pub fn is_draft_anchored(&self) -> bool {
        self.inner.borrow().draft.is_anchored()
    }

    pub fn list_saved(&self) -> Vec<Item> {
        self.inner.borrow().store.list().to_vec()
    }

    pub fn is_autosave_pending(&self) -> bool {
        self.inner.borrow().autosave.is_pending()
    }

    /// Apply a form edit to the draft and restart the autosave quiet period
    pub fn edit_draft(&self, field: ItemField, value: &str) {
        {
            let mut guard = self.inner.borrow_mut();
            let state = &mut *guard;
            state.draft.edit(field, value, state.ids.as_ref());

            let weak = Rc::downgrade(&self.inner);
            state
                .autosave
                .observe_change(move |ticket| Self::on_quiet_period_elapsed(&weak, ticket));
        }
        self.notify();
    }

    /// Open a saved quote as the draft; returns false for an unknown id
    pub fn load_draft(&self, id: &str) -> bool {
        {
            let mut state = self.inner.borrow_mut();
            let Some(item) = state.store.find_by_id(id).cloned() else {
                log::warn!("Cannot open unknown quote '{}'", id);
                return false;
            };
            state.autosave.cancel();
            state.draft.load(item);
        }
        self.notify();
        true
    }

    /// Start over with a fresh, unanchored draft
    pub fn reset_draft(&self) {
        {
            let mut state = self.inner.borrow_mut();
            state.autosave.cancel();
            state.draft.reset();
        }
        self.notify();
    }

    /// Remove a saved quote; resets the draft if it was the one being edited
    ///
    /// Returns whether the collection contained `id`.
    pub fn delete_item(&self, id: &str) -> bool {
        let removed = {
            let mut state = self.inner.borrow_mut();
            if !id.is_empty() && state.draft.item().id == id {
                state.autosave.cancel();
                state.draft.reset();
            }
            match state.store.delete(id) {
                Ok(removed) => removed,
                Err(e) => {
                    log::error!("Failed to persist quotes: {}", e);
                    true
                }
            }
        };
        if removed {
            log::info!("Deleted quote {}", id);
        }
        self.notify();
        removed
    }

    /// Manual save: write the draft now, unless it is blank
    pub fn save_now(&self) -> bool {
        let saved = {
            let mut state = self.inner.borrow_mut();
            state.autosave.cancel();
            state.persist_draft()
        };
        if saved {
            self.notify();
        }
        saved
    }

    /// Write a pending autosave immediately (e.g. when the page is hidden)
    pub fn flush(&self) -> bool {
        let saved = {
            let mut state = self.inner.borrow_mut();
            if !state.autosave.cancel() {
                return false;
            }
            state.persist_draft()
        };
        if saved {
            self.notify();
        }
        saved
    }

    fn on_quiet_period_elapsed(inner: &Weak<RefCell<SessionState>>, ticket: Ticket) {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let session = QuoteSession { inner };
        let saved = {
            let mut state = session.inner.borrow_mut();
            if !state.autosave.take_due(ticket) {
                return;
            }
            state.persist_draft()
        };
        if saved {
            session.notify();
        }
    }

    fn notify(&self) {
        let listener = self.inner.borrow().listener.clone();
        if let Some(listener) = listener {
            listener(self);
        }
    }
}
