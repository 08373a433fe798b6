//! Billbook Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Persistence over a key-value slot
//! - session: In-memory editor working copy
//! - suggest: Text-generation suggestion adapter
//! - render: Printable bill document

pub mod domain;
pub mod render;
pub mod repository;
pub mod session;
pub mod suggest;

pub use domain::{Customer, DomainError, DomainResult, Field, FieldKind, FieldSet, FieldValue, PricingEntry};
pub use repository::{FileKvStore, KvStore, MemoryKvStore, PricingRepository, SaveOutcome, PRICING_SLOT};
pub use session::EditorSession;
pub use suggest::{GeminiProvider, Suggestion, SuggestionProvider};
