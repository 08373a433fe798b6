//! Field Entity and Collections
//!
//! One worksheet line item, plus the id-keyed collection the editor works on.
//! Fields are looked up by id, never by position, so the collection stays
//! correct after arbitrary deletions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::error::{DomainError, DomainResult};
use super::seed;

/// Field kind determines value coercion and which seed list applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Wire detail, free text value
    Wire,
    /// Price line, numeric value
    Price,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Wire => "wire",
            FieldKind::Price => "price",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "price" => FieldKind::Price,
            _ => FieldKind::Wire,
        }
    }
}

/// A field value: numbers for price fields, text or numbers for wire fields.
/// Untagged so the persisted JSON keeps plain numbers and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without a trailing ".0" (prices are rupees)
            FieldValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                write!(f, "{}", *n as i64)
            }
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One labeled line item. `id` is unique within its collection and 1-based;
/// `unit` is a display suffix only and never participates in computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: u32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Field {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            value: None,
            unit: None,
        }
    }

    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Strip everything but digits, then coerce. Mirrors what the price inputs
/// accept: "rs 10" and "1,000" become 10 and 1000, junk becomes 0.
fn coerce_price_input(raw: &str) -> f64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0.0)
}

/// An ordered field collection keyed by id.
///
/// Internally a map from id to field plus a stable display order, so removal
/// leaves gaps instead of shifting ids. Freed ids are never reused: new fields
/// take one past the highest id ever assigned in this collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    kind: FieldKind,
    fields: BTreeMap<u32, Field>,
    order: Vec<u32>,
    seed_len: u32,
    next_id: u32,
}

impl FieldSet {
    /// Build the seeded collection for a kind
    pub fn seed(kind: FieldKind) -> Self {
        Self::from_fields(kind, seed::fields(kind))
    }

    /// Rebuild a collection from persisted fields (e.g. when editing a saved
    /// entry). Custom classification still keys off the static seed length.
    pub fn from_fields(kind: FieldKind, fields: Vec<Field>) -> Self {
        let seed_len = seed::len(kind);
        let mut map = BTreeMap::new();
        let mut order = Vec::with_capacity(fields.len());
        let mut highest = 0;
        for field in fields {
            let id = field.id;
            highest = highest.max(id);
            if map.insert(id, field).is_none() {
                order.push(id);
            }
        }
        Self {
            kind,
            fields: map,
            order,
            seed_len,
            next_id: highest + 1,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Field> {
        self.fields.get(&id)
    }

    /// Iterate fields in display order
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.order.iter().filter_map(|id| self.fields.get(id))
    }

    /// Snapshot the collection in display order
    pub fn to_vec(&self) -> Vec<Field> {
        self.iter().cloned().collect()
    }

    /// A field is custom iff its id lies beyond the original seed list
    pub fn is_custom(&self, id: u32) -> bool {
        id > self.seed_len
    }

    /// Replace the value of the field with this id. Price input is stripped
    /// to digits and coerced to a number; wire input is kept as text.
    pub fn set_value(&mut self, id: u32, raw: &str) -> DomainResult<()> {
        let kind = self.kind;
        let field = self
            .fields
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("{} field {} not found", kind.as_str(), id)))?;
        field.value = Some(match kind {
            FieldKind::Price => FieldValue::Number(coerce_price_input(raw)),
            FieldKind::Wire => FieldValue::Text(raw.to_string()),
        });
        Ok(())
    }

    /// Append a custom field and return its id. The label is required; a
    /// price initial value is numeric-coerced with 0 as fallback.
    pub fn add(&mut self, label: &str, initial: &str) -> DomainResult<u32> {
        if label.trim().is_empty() {
            return Err(DomainError::InvalidInput("field label is required".to_string()));
        }
        let value = match self.kind {
            FieldKind::Price => FieldValue::Number(initial.trim().parse().unwrap_or(0.0)),
            FieldKind::Wire => FieldValue::Text(initial.to_string()),
        };
        let id = self.next_id;
        self.next_id += 1;
        self.fields.insert(id, Field::new(id, label).with_value(value));
        self.order.push(id);
        Ok(id)
    }

    /// Remove the field with this id. Remaining fields keep their ids.
    pub fn remove(&mut self, id: u32) -> DomainResult<Field> {
        let field = self
            .fields
            .remove(&id)
            .ok_or_else(|| DomainError::NotFound(format!("{} field {} not found", self.kind.as_str(), id)))?;
        self.order.retain(|fid| *fid != id);
        Ok(field)
    }

    /// Label-keyed merge of suggestion candidates: every field whose label
    /// exactly matches a candidate takes that candidate's value (0 when the
    /// candidate has none). First candidate wins on duplicate labels; fields
    /// without a match are left untouched.
    pub fn merge_by_label(&mut self, candidates: &[Field]) {
        for id in self.order.clone() {
            let Some(field) = self.fields.get_mut(&id) else {
                continue;
            };
            if let Some(candidate) = candidates.iter().find(|c| c.label == field.label) {
                field.value = Some(
                    candidate
                        .value
                        .clone()
                        .unwrap_or(FieldValue::Number(0.0)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_prices() -> FieldSet {
        FieldSet::from_fields(FieldKind::Price, Vec::new())
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        for kind in [FieldKind::Wire, FieldKind::Price] {
            let set = FieldSet::seed(kind);
            let ids: Vec<u32> = set.iter().map(|f| f.id).collect();
            let expected: Vec<u32> = (1..=set.len() as u32).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn test_set_value_coerces_price_input() {
        let mut set = FieldSet::from_fields(
            FieldKind::Price,
            vec![Field::new(1, "Lighting Point").with_value(FieldValue::Number(0.0))],
        );
        set.set_value(1, "10").unwrap();
        assert_eq!(set.get(1).unwrap().value, Some(FieldValue::Number(10.0)));

        set.set_value(1, "rs 1,500").unwrap();
        assert_eq!(set.get(1).unwrap().value, Some(FieldValue::Number(1500.0)));

        set.set_value(1, "junk").unwrap();
        assert_eq!(set.get(1).unwrap().value, Some(FieldValue::Number(0.0)));
    }

    #[test]
    fn test_set_value_keeps_wire_text() {
        let mut set = FieldSet::seed(FieldKind::Wire);
        set.set_value(1, "2.5 sq mm").unwrap();
        assert_eq!(
            set.get(1).unwrap().value,
            Some(FieldValue::Text("2.5 sq mm".to_string()))
        );
    }

    #[test]
    fn test_set_value_unknown_id_is_not_found() {
        let mut set = empty_prices();
        assert!(matches!(set.set_value(99, "10"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_adds_on_empty_collection_number_from_one() {
        let mut set = empty_prices();
        for (i, label) in ["A", "B", "C"].iter().enumerate() {
            let id = set.add(label, "1").unwrap();
            assert_eq!(id, i as u32 + 1);
        }
        let ids: Vec<u32> = set.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_rejects_blank_label() {
        let mut set = empty_prices();
        assert!(matches!(set.add("   ", "1"), Err(DomainError::InvalidInput(_))));
        assert!(set.is_empty());
    }

    #[test]
    fn test_removed_ids_are_never_reused() {
        let mut set = FieldSet::seed(FieldKind::Price);
        let seed_len = set.len() as u32;

        // Delete a seed field, then keep adding; no id may repeat.
        set.remove(1).unwrap();
        let first = set.add("Custom A", "5").unwrap();
        set.remove(first).unwrap();
        let second = set.add("Custom B", "7").unwrap();

        assert!(first > seed_len);
        assert!(second > first);
        let mut ids: Vec<u32> = set.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), set.len());
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let mut set = empty_prices();
        assert!(matches!(set.remove(3), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_custom_classification() {
        let mut set = FieldSet::seed(FieldKind::Wire);
        let seed_len = set.len() as u32;
        assert!(!set.is_custom(1));
        assert!(!set.is_custom(seed_len));
        let id = set.add("Extra wire", "").unwrap();
        assert!(set.is_custom(id));
    }

    #[test]
    fn test_merge_by_label_only_touches_matches() {
        let mut set = FieldSet::from_fields(
            FieldKind::Price,
            vec![
                Field::new(1, "Lighting Point").with_value(FieldValue::Number(0.0)),
                Field::new(2, "Fan Point").with_value(FieldValue::Number(15.0)),
            ],
        );
        let candidates = vec![Field::new(7, "Lighting Point").with_value(FieldValue::Number(10.0))];
        set.merge_by_label(&candidates);
        assert_eq!(set.get(1).unwrap().value, Some(FieldValue::Number(10.0)));
        assert_eq!(set.get(2).unwrap().value, Some(FieldValue::Number(15.0)));
    }

    #[test]
    fn test_merge_defaults_missing_candidate_value_to_zero() {
        let mut set = FieldSet::from_fields(
            FieldKind::Price,
            vec![Field::new(1, "Lighting Point").with_value(FieldValue::Number(42.0))],
        );
        set.merge_by_label(&[Field::new(1, "Lighting Point")]);
        assert_eq!(set.get(1).unwrap().value, Some(FieldValue::Number(0.0)));
    }

    #[test]
    fn test_merge_first_candidate_wins_on_duplicate_labels() {
        let mut set = FieldSet::from_fields(
            FieldKind::Price,
            vec![Field::new(1, "Lighting Point").with_value(FieldValue::Number(0.0))],
        );
        let candidates = vec![
            Field::new(1, "Lighting Point").with_value(FieldValue::Number(10.0)),
            Field::new(2, "Lighting Point").with_value(FieldValue::Number(99.0)),
        ];
        set.merge_by_label(&candidates);
        assert_eq!(set.get(1).unwrap().value, Some(FieldValue::Number(10.0)));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(FieldValue::Number(10.0).to_string(), "10");
        assert_eq!(FieldValue::Number(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::Text("1.5mm".to_string()).to_string(), "1.5mm");
    }
}
