//! Draft
//!
//! The single quote currently being edited.

use crate::domain::{Item, ItemField};
use crate::ids::IdGenerator;

/// Whether the draft has been given a persistent identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Unanchored,
    Anchored,
}

/// The in-edit quote and its anchoring state
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    item: Item,
    anchor: Anchor,
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

impl Draft {
    /// Fresh, empty, unanchored draft
    pub fn new() -> Self {
        Self {
            item: Item::new(),
            anchor: Anchor::Unanchored,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn is_anchored(&self) -> bool {
        self.anchor == Anchor::Anchored
    }

    /// Apply a user edit, anchoring the draft first if needed
    ///
    /// Returns true when this edit anchored the draft.
    pub fn edit(&mut self, field: ItemField, raw: &str, ids: &dyn IdGenerator) -> bool {
        let anchored_now = self.anchor == Anchor::Unanchored;
        if anchored_now {
            self.item.id = ids.generate_id();
            self.anchor = Anchor::Anchored;
            log::debug!("Draft anchored as '{}'", self.item.id);
        }
        self.item.apply(field, raw);
        anchored_now
    }

    /// Replace the draft wholesale with a saved quote
    pub fn load(&mut self, item: Item) {
        self.anchor = if item.id.is_empty() {
            Anchor::Unanchored
        } else {
            Anchor::Anchored
        };
        self.item = item;
    }

    /// Discard the draft in favour of a fresh one
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Unanchored, default name and no amounts: never persisted
    pub fn is_blank(&self) -> bool {
        self.anchor == Anchor::Unanchored
            && self.item.has_default_name()
            && self.item.has_zero_amounts()
    }
}
