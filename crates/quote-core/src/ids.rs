//! Identifier Generation
//!
//! Injectable source of unique quote identifiers.

use uuid::Uuid;

/// Produces identifiers that are unique for practical purposes
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

/// Random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
