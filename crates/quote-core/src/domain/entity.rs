//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for entities kept in a collection.

/// Core trait for all stored entities
///
/// Identifiers are opaque strings. An empty identifier means the entity
/// has not been assigned one yet.
pub trait Entity: Clone {
    /// Returns the entity's identifier (empty when unassigned)
    fn id(&self) -> &str;

    /// Assigns the entity's identifier
    fn set_id(&mut self, id: String);

    /// Whether an identifier has been assigned
    fn has_id(&self) -> bool {
        !self.id().is_empty()
    }
}
