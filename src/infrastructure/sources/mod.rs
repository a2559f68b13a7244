//! Repository source managers
//!
//! - [`VersionedSource`] - git checkouts under the managed repositories directory
//! - [`LocalSource`] - directories used in place
//! - [`EphemeralSource`] - one-shot clones for URL installs

mod ephemeral;
mod local;
mod versioned;

#[cfg(test)]
pub(crate) mod fake_vcs;

use std::path::Path;

pub use ephemeral::{clone_url, CleanupGuard, EphemeralCheckout, EphemeralSource};
pub use local::LocalSource;
pub use versioned::VersionedSource;

use crate::error::{TpromptsError, TpromptsResult};
use crate::infrastructure::repositories::JsonManifestLoader;

/// A repository is usable when at least one top-level, non-hidden
/// directory carries a manifest
pub fn validate_structure(path: &Path) -> TpromptsResult<()> {
    if JsonManifestLoader::new().discover(path)?.is_empty() {
        return Err(TpromptsError::NoPromptsFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Remove a directory, logging instead of failing
pub(crate) fn remove_quietly(path: &Path) {
    if path.exists() {
        if let Err(e) = std::fs::remove_dir_all(path) {
            log::warn!("Failed to clean up {}: {}", path.display(), e);
        }
    }
}
