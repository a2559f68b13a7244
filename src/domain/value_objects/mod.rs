//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod editor;
mod identifier;
pub mod path;

pub use editor::Editor;
pub use identifier::ParsedIdentifier;
