//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod registry_store;
pub mod repository_source;
pub mod version_control;

pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
pub use registry_store::{RegistryError, RegistryStore};
pub use repository_source::{RepositorySource, VersionList};
pub use version_control::{Head, VersionControl};
