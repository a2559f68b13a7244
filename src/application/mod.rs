//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RegistryUseCase` - Registry CRUD over a `RegistryStore`
//! - `RegisterUseCase` - Register/unregister repositories
//! - `PromptResolver` - Identifier to prompt directory and manifest
//! - `InstallUseCase` / `RemoveUseCase` - Plan and apply installations
//! - `UpdateUseCase` - Pull versioned repositories
//! - `VersionUseCase` - Show, list and switch versions
//! - `ListUseCase` - Describe available prompts

pub mod install;
pub mod list;
pub mod register;
pub mod registry;
pub mod resolver;
#[cfg(test)]
pub(crate) mod testing;
pub mod update;
pub mod version;

pub use install::{InstallPlan, InstallUseCase, RemovalPlan, RemoveUseCase};
pub use list::{ListUseCase, PromptListing, PromptSummary, RepositoryPrompts};
pub use register::{derive_name, RegisterOptions, RegisterResult, RegisterUseCase, UnregisterResult};
pub use registry::RegistryUseCase;
pub use resolver::{source_for, PromptResolver, ResolvedPrompt};
pub use update::{UpdateOutcome, UpdateStatus, UpdateSummary, UpdateUseCase};
pub use version::{VersionInfo, VersionUseCase};
