//! Entry Editor Session
//!
//! A mutable working copy of one estimate. Starts either from the seed
//! worksheet (new estimate) or from a deep copy of a saved entry (editing).
//! Nothing touches the store until commit; abandoning the session just drops
//! the working copy.

use uuid::Uuid;

use crate::domain::{Customer, DomainResult, Field, FieldKind, FieldSet, PricingEntry};
use crate::render::bill_html;
use crate::repository::{KvStore, PricingRepository, SaveOutcome};

pub struct EditorSession {
    edit_id: Option<Uuid>,
    customer: Customer,
    wires: FieldSet,
    prices: FieldSet,
}

impl EditorSession {
    /// Fresh working copy from the seed worksheet, not bound to any entry
    pub fn new() -> Self {
        Self {
            edit_id: None,
            customer: Customer::default(),
            wires: FieldSet::seed(FieldKind::Wire),
            prices: FieldSet::seed(FieldKind::Price),
        }
    }

    /// Working copy bound to a saved entry; the entry itself stays untouched
    /// until commit.
    pub fn edit(entry: &PricingEntry) -> Self {
        Self {
            edit_id: Some(entry.id),
            customer: entry.customer.clone(),
            wires: FieldSet::from_fields(FieldKind::Wire, entry.wires_values.clone()),
            prices: FieldSet::from_fields(FieldKind::Price, entry.price_values.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn edit_id(&self) -> Option<Uuid> {
        self.edit_id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn customer_mut(&mut self) -> &mut Customer {
        &mut self.customer
    }

    pub fn wires(&self) -> &FieldSet {
        &self.wires
    }

    pub fn prices(&self) -> &FieldSet {
        &self.prices
    }

    fn set_mut(&mut self, kind: FieldKind) -> &mut FieldSet {
        match kind {
            FieldKind::Wire => &mut self.wires,
            FieldKind::Price => &mut self.prices,
        }
    }

    /// Replace one field's value in the working copy
    pub fn set_value(&mut self, kind: FieldKind, id: u32, raw: &str) -> DomainResult<()> {
        self.set_mut(kind).set_value(id, raw)
    }

    /// Append a custom field, returning its id
    pub fn add_field(&mut self, kind: FieldKind, label: &str, initial: &str) -> DomainResult<u32> {
        self.set_mut(kind).add(label, initial)
    }

    /// Remove a field from the working copy
    pub fn remove_field(&mut self, kind: FieldKind, id: u32) -> DomainResult<()> {
        self.set_mut(kind).remove(id).map(|_| ())
    }

    /// Apply suggestion candidates to the price fields by exact label match
    pub fn merge_suggestions(&mut self, candidates: &[Field]) {
        self.prices.merge_by_label(candidates);
    }

    /// Save or update through the repository. The working copy is untouched
    /// either way, so a failed save can simply be retried.
    pub async fn commit<S: KvStore>(
        &self,
        repo: &PricingRepository<S>,
    ) -> DomainResult<SaveOutcome> {
        repo.upsert(
            self.edit_id,
            self.customer.clone(),
            self.wires.to_vec(),
            self.prices.to_vec(),
        )
        .await
    }

    /// Printable bill for the current working copy
    pub fn render_bill(&self) -> String {
        bill_html(&self.prices.to_vec(), &self.wires.to_vec())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
