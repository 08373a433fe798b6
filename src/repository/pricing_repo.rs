//! Pricing Entry Repository
//!
//! Read-modify-write operations over the single persisted list of saved
//! estimates. Every mutation reloads the slot, applies the change, and writes
//! the whole list back; write failures surface to the caller so the user is
//! never told "saved" when it was not.

use log::warn;
use uuid::Uuid;

use super::kv::KvStore;
use crate::domain::{now_millis, Customer, DomainError, DomainResult, Field, PricingEntry};

/// The one slot the estimate list lives in
pub const PRICING_SLOT: &str = "pricingList";

/// Result of a save-or-update commit, with its user-facing confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(PricingEntry),
    Updated(PricingEntry),
}

impl SaveOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Saved(_) => "Pricing saved!",
            SaveOutcome::Updated(_) => "Pricing updated!",
        }
    }

    pub fn entry(&self) -> &PricingEntry {
        match self {
            SaveOutcome::Saved(entry) | SaveOutcome::Updated(entry) => entry,
        }
    }
}

/// Repository over the persisted pricing list
pub struct PricingRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> PricingRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored list in insertion order. A missing or unparseable slot
    /// reads as empty; corruption is logged, never fatal.
    async fn load(&self) -> DomainResult<Vec<PricingEntry>> {
        let Some(payload) = self.store.read(PRICING_SLOT).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&payload) {
            Ok(list) => Ok(list),
            Err(e) => {
                warn!("pricing list slot is not valid JSON, starting empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, list: &[PricingEntry]) -> DomainResult<()> {
        let payload = serde_json::to_string(list)
            .map_err(|e| DomainError::Persistence(format!("failed to encode pricing list: {}", e)))?;
        self.store.write(PRICING_SLOT, &payload).await
    }

    /// All saved entries, newest first
    pub async fn list(&self) -> DomainResult<Vec<PricingEntry>> {
        let mut list = self.load().await?;
        list.reverse();
        Ok(list)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<PricingEntry>> {
        Ok(self.load().await?.into_iter().find(|entry| entry.id == id))
    }

    /// Save a working copy. A known `id` updates that entry in place
    /// (timestamp forced to now, id untouched); an unknown or absent `id`
    /// appends a brand-new entry.
    pub async fn upsert(
        &self,
        id: Option<Uuid>,
        customer: Customer,
        wires_values: Vec<Field>,
        price_values: Vec<Field>,
    ) -> DomainResult<SaveOutcome> {
        let mut list = self.load().await?;

        if let Some(edit_id) = id {
            if let Some(existing) = list.iter_mut().find(|entry| entry.id == edit_id) {
                existing.customer = customer;
                existing.wires_values = wires_values;
                existing.price_values = price_values;
                existing.timestamp = now_millis();
                let updated = existing.clone();
                self.persist(&list).await?;
                return Ok(SaveOutcome::Updated(updated));
            }
        }

        let entry = PricingEntry::new(customer, wires_values, price_values);
        list.push(entry.clone());
        self.persist(&list).await?;
        Ok(SaveOutcome::Saved(entry))
    }

    /// Delete an entry. The caller handles any confirmation prompt.
    pub async fn remove(&self, id: Uuid) -> DomainResult<()> {
        let mut list = self.load().await?;
        let before = list.len();
        list.retain(|entry| entry.id != id);
        if list.len() == before {
            return Err(DomainError::NotFound(format!("pricing entry {} not found", id)));
        }
        self.persist(&list).await
    }

    /// Duplicate an entry under a fresh id and timestamp
    pub async fn copy(&self, id: Uuid) -> DomainResult<PricingEntry> {
        let mut list = self.load().await?;
        let source = list
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("pricing entry {} not found", id)))?;
        let copy = source.duplicated();
        list.push(copy.clone());
        self.persist(&list).await?;
        Ok(copy)
    }
}
