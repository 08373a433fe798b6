//! Editor Session Layer
//!
//! The in-memory working copy of one estimate being filled in or edited.

mod editor;

pub use editor::EditorSession;
