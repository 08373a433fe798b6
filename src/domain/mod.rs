//! Domain Layer
//!
//! Contains all domain entities and core business rules.
//! This layer has NO external service dependencies (except serde for serialization).

mod customer;
mod error;
mod field;
mod pricing;
pub mod seed;

pub use customer::Customer;
pub use error::{DomainError, DomainResult};
pub use field::{Field, FieldKind, FieldSet, FieldValue};
pub use pricing::{now_millis, PricingEntry};
