//! Domain Layer
//!
//! Contains the quote entity and the pure pricing rules.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod item;
mod pricing;
mod profit_rate;

pub use entity::Entity;
pub use item::{normalize_name, parse_amount, Item, ItemField, DEFAULT_NAME};
pub use pricing::{compute_totals, Totals};
pub use profit_rate::ProfitRate;
