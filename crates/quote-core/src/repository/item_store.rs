//! Item Store
//!
//! The single authoritative collection of saved quotes, persisted as a
//! JSON array under one key of a [`StorageMedium`]. Every mutation
//! replaces the whole payload synchronously.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::medium::StorageMedium;
use super::reconcile;
use super::traits::Repository;
use crate::domain::{Item, ProfitRate};
use crate::error::StoreResult;
use crate::ids::IdGenerator;

/// Saved quotes backed by a durable medium
pub struct ItemStore<M: StorageMedium> {
    medium: M,
    key: String,
    items: Vec<Item>,
}

impl<M: StorageMedium> ItemStore<M> {
    /// Create an empty store; call [`ItemStore::load`] to read the medium
    pub fn new(medium: M, key: impl Into<String>) -> Self {
        Self {
            medium,
            key: key.into(),
            items: Vec::new(),
        }
    }

    /// Read the durable payload, recovering whatever can be recovered
    ///
    /// Missing, unparseable or non-array payloads yield an empty collection.
    pub fn load(&mut self, ids: &dyn IdGenerator) -> &[Item] {
        self.items = match self.medium.read(&self.key) {
            Some(raw) => decode_collection(&raw, ids),
            None => Vec::new(),
        };
        log::debug!("Loaded {} saved quotes from '{}'", self.items.len(), self.key);
        &self.items
    }

    /// Overwrite the whole durable payload with `items`
    pub fn replace_all(&mut self, items: Vec<Item>) -> StoreResult<()> {
        let payload = serde_json::to_string(&items)?;
        // in-memory state follows the caller even if the write fails
        self.items = items;
        self.medium.write(&self.key, &payload)
    }
}

impl<M: StorageMedium> Repository<Item> for ItemStore<M> {
    fn list(&self) -> &[Item] {
        &self.items
    }

    fn find_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn upsert(&mut self, entity: Item, ids: &dyn IdGenerator) -> StoreResult<Item> {
        let (next, stored) = reconcile::upsert(&self.items, entity, ids);
        self.replace_all(next)?;
        Ok(stored)
    }

    fn delete(&mut self, id: &str) -> StoreResult<bool> {
        if self.find_by_id(id).is_none() {
            return Ok(false);
        }
        let remaining = self.items.iter().filter(|item| item.id != id).cloned().collect();
        self.replace_all(remaining)?;
        Ok(true)
    }
}

/// Decode a payload into a duplicate-free collection
fn decode_collection(raw: &str, ids: &dyn IdGenerator) -> Vec<Item> {
    let records = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(records)) => records,
        Ok(_) => {
            log::warn!("Saved quotes payload is not an array, starting empty");
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Saved quotes payload is malformed ({}), starting empty", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(records.len());
    for record in &records {
        let Value::Object(fields) = record else {
            log::warn!("Skipping non-object quote record");
            continue;
        };
        let mut item = record_to_item(fields);
        if item.id.is_empty() {
            item.id = ids.generate_id();
        }
        if !seen.insert(item.id.clone()) {
            log::warn!("Skipping duplicate quote id '{}'", item.id);
            continue;
        }
        items.push(item);
    }
    items
}

/// Convert a stored record to Item, backfilling defaults
fn record_to_item(fields: &Map<String, Value>) -> Item {
    let defaults = Item::new();
    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .unwrap_or(defaults.name);

    Item {
        id: fields.get("id").and_then(Value::as_str).unwrap_or_default().to_string(),
        name,
        quantity: number_field(fields, "quantity"),
        unit_price: number_field(fields, "pricePerItem"),
        setup_fee: number_field(fields, "setupFee"),
        shipping: number_field(fields, "shipping"),
        profit_rate: fields
            .get("profitPercent")
            .map(|value| match value {
                Value::String(raw) => ProfitRate::parse(raw),
                other => other.as_f64().map(ProfitRate::from_fraction).unwrap_or_default(),
            })
            .unwrap_or_default(),
    }
}

/// Numbers or numeric strings; anything else is 0
fn number_field(fields: &Map<String, Value>, key: &str) -> f64 {
    match fields.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(raw)) => crate::domain::parse_amount(raw),
        _ => 0.0,
    }
}
