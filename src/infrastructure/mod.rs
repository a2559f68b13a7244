//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file system and the tprompts home directory
//! - `repositories/` - registry store, manifest and metadata readers
//! - `vcs/` - git subprocess adapter
//! - `sources/` - versioned, local and ephemeral repository sources

pub mod fs;
pub mod repositories;
pub mod sources;
pub mod vcs;

// Re-export for convenience
pub use fs::{tprompts_home_dir, LocalFs};
pub use repositories::{read_repository_metadata, JsonManifestLoader, JsonRegistryStore};
pub use sources::{EphemeralSource, LocalSource, VersionedSource};
pub use vcs::{GitCli, GitTimeouts};
