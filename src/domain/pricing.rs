//! Pricing Entry Entity
//!
//! One saved estimate snapshot. The serialized shape matches the persisted
//! slot format exactly: camelCase keys, uuid string id, millisecond timestamp,
//! field arrays with optional value/unit.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::customer::Customer;
use super::field::Field;

/// Milliseconds since the epoch, the timestamp unit used throughout
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// A persisted customer estimate: customer details plus deep copies of both
/// field collections at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingEntry {
    pub id: Uuid,
    /// Creation-or-last-update instant, overwritten on every save
    pub timestamp: i64,
    #[serde(default)]
    pub customer: Customer,
    #[serde(rename = "wiresValues", default)]
    pub wires_values: Vec<Field>,
    #[serde(rename = "priceValues", default)]
    pub price_values: Vec<Field>,
}

impl PricingEntry {
    /// Snapshot a working copy into a brand-new entry
    pub fn new(customer: Customer, wires_values: Vec<Field>, price_values: Vec<Field>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: now_millis(),
            customer,
            wires_values,
            price_values,
        }
    }

    /// Deep copy with a fresh identity, used by the store's copy operation
    pub fn duplicated(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: now_millis(),
            ..self.clone()
        }
    }
}
