//! tprompts - package manager for reusable prompt bundles
//!
//! Prompt bundles live in repositories (git remotes or local directories).
//! Each bundle carries a `tprompts.json` manifest mapping its files to
//! editor-specific destinations; installing copies them into a project,
//! optionally wrapped in a prefix and suffix.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::UserConfig;
pub use domain::entities::{PromptManifest, RepositoryKind, RepositoryRecord};
pub use domain::value_objects::{Editor, ParsedIdentifier};
pub use error::{TpromptsError, TpromptsResult};
