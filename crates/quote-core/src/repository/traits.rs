//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the saved collection.
//! Writes go through synchronously; reads are served from memory.

use crate::domain::Entity;
use crate::error::StoreResult;
use crate::ids::IdGenerator;

/// Ordered, id-unique collection of entities
pub trait Repository<T: Entity> {
    /// All entities in insertion order
    fn list(&self) -> &[T];

    /// Find entity by ID
    fn find_by_id(&self, id: &str) -> Option<&T>;

    /// Insert or replace in place; returns the stored entity
    fn upsert(&mut self, entity: T, ids: &dyn IdGenerator) -> StoreResult<T>;

    /// Delete entity by ID; returns whether anything was removed
    fn delete(&mut self, id: &str) -> StoreResult<bool>;
}
