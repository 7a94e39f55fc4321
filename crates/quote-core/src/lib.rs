//! Quote Pad Core
//!
//! Layered architecture:
//! - domain: quote entity and pricing rules
//! - repository: durable saved collection and the upsert reconciler
//! - session: draft, debounced autosave and the session facade
//!
//! Nothing here touches the browser; storage, timers and identifiers are
//! injected.

mod config;
mod error;
mod ids;

pub mod domain;
pub mod repository;
pub mod session;

#[cfg(test)]
mod testing;

pub use config::{SessionConfig, DEFAULT_QUIET_PERIOD_MS, DEFAULT_STORAGE_KEY};
pub use domain::{compute_totals, Item, ItemField, ProfitRate, Totals};
pub use error::{StoreError, StoreResult};
pub use ids::{IdGenerator, UuidGenerator};
pub use repository::{ItemStore, MemoryMedium, StorageMedium};
pub use session::{QuoteSession, ScheduledTask, Timer};
