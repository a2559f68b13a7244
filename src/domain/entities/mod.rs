//! Domain Entities
//!
//! - `RepositoryRecord` - a registered prompt repository
//! - `RegistryState` - all registered repositories plus the default
//! - `PromptManifest` - a prompt's `tprompts.json`
//! - `InstallationTarget` - one computed file write/removal

mod installation_target;
mod manifest;
mod registry;
mod repository;

pub use installation_target::InstallationTarget;
pub use manifest::{EditorMapping, FileRule, PromptManifest, RuleKind, MANIFEST_FILE};
pub use registry::RegistryState;
pub use repository::{RepositoryKind, RepositoryMetadata, RepositoryRecord};
