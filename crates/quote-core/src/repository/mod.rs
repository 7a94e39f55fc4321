//! Repository Layer
//!
//! Durable collection of saved quotes and the upsert reconciler.

mod item_store;
mod medium;
mod reconcile;
mod traits;

pub use item_store::ItemStore;
pub use medium::{MemoryMedium, StorageMedium};
pub use reconcile::upsert;
pub use traits::Repository;
