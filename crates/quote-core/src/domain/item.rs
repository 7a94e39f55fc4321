//! Item Entity
//!
//! A named price quote: cost inputs plus the target margin.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::profit_rate::ProfitRate;

/// Name given to a quote whose name was left empty
pub const DEFAULT_NAME: &str = "Untitled";

/// A price quote
///
/// Amounts are stored exactly as entered; negative values are only
/// clamped when totals are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier (empty until the quote is anchored)
    pub id: String,
    /// Display label
    pub name: String,
    /// Number of units
    pub quantity: f64,
    /// Price of a single unit
    #[serde(rename = "pricePerItem")]
    pub unit_price: f64,
    /// One-off setup cost
    pub setup_fee: f64,
    /// Shipping cost
    pub shipping: f64,
    /// Target margin
    #[serde(rename = "profitPercent")]
    pub profit_rate: ProfitRate,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: DEFAULT_NAME.to_string(),
            quantity: 0.0,
            unit_price: 0.0,
            setup_fee: 0.0,
            shipping: 0.0,
            profit_rate: ProfitRate::default(),
        }
    }
}

/// Editable fields of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    Quantity,
    UnitPrice,
    SetupFee,
    Shipping,
    ProfitRate,
}

impl Item {
    /// Create an unanchored quote with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a raw form value to one field, coercing invalid input
    pub fn apply(&mut self, field: ItemField, raw: &str) {
        match field {
            ItemField::Name => self.name = normalize_name(raw),
            ItemField::Quantity => self.quantity = parse_amount(raw),
            ItemField::UnitPrice => self.unit_price = parse_amount(raw),
            ItemField::SetupFee => self.setup_fee = parse_amount(raw),
            ItemField::Shipping => self.shipping = parse_amount(raw),
            ItemField::ProfitRate => self.profit_rate = ProfitRate::parse(raw),
        }
    }

    /// Whether every cost input is exactly zero
    pub fn has_zero_amounts(&self) -> bool {
        self.quantity == 0.0
            && self.unit_price == 0.0
            && self.setup_fee == 0.0
            && self.shipping == 0.0
    }

    /// Whether the name is still the default one (ignoring case and padding)
    pub fn has_default_name(&self) -> bool {
        self.name.trim().eq_ignore_ascii_case(DEFAULT_NAME)
    }
}

impl Entity for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Empty (or whitespace-only) names become the default name
pub fn normalize_name(raw: &str) -> String {
    if raw.trim().is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        raw.to_string()
    }
}

/// Parse a numeric form value; empty, non-numeric and non-finite input is 0
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
