//! Repository Implementations
//!
//! Concrete implementations of the persistence ports and file readers.

mod manifest;
mod metadata;
mod registry;

pub use manifest::JsonManifestLoader;
pub use metadata::{read_repository_metadata, METADATA_FILE};
pub use registry::{JsonRegistryStore, REGISTRY_FILE};
