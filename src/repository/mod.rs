//! Repository Layer
//!
//! Persistence abstractions and implementations over a key-value slot.

mod kv;
mod pricing_repo;


pub use kv::{FileKvStore, KvStore, MemoryKvStore};
pub use pricing_repo::{PricingRepository, SaveOutcome, PRICING_SLOT};
