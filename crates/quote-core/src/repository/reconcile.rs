//! Upsert Reconciler
//!
//! Insert-or-replace-in-place by identifier, preserving collection order.

use crate::domain::Entity;
use crate::ids::IdGenerator;

/// Merge `entity` into `collection`
///
/// An entity without an id gets a fresh one first. An existing id is
/// replaced at its original position; an unseen id is appended.
/// Returns the new collection and the entity as stored.
pub fn upsert<T: Entity>(collection: &[T], mut entity: T, ids: &dyn IdGenerator) -> (Vec<T>, T) {
    if !entity.has_id() {
        entity.set_id(ids.generate_id());
    }

    let mut next = collection.to_vec();
    match next.iter_mut().find(|existing| existing.id() == entity.id()) {
        Some(existing) => *existing = entity.clone(),
        None => next.push(entity.clone()),
    }
    (next, entity)
}
