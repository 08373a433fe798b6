//! Document Rendering
//!
//! Pure printable-bill generation; no state, no side effects.

mod bill;

pub use bill::bill_html;
