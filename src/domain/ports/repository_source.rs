//! RepositorySource port
//!
//! One capability per repository kind. The installer only needs
//! [`RepositorySource::working_path`]; the version operations are optional and
//! default to `NotVersioned`.

use std::path::{Path, PathBuf};

use crate::domain::entities::RepositoryRecord;
use crate::error::{TpromptsError, TpromptsResult};

/// Branches and tags available for checkout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionList {
    pub branches: Vec<String>,
    pub tags: Vec<String>,
}

impl VersionList {
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty() && self.tags.is_empty()
    }
}

pub trait RepositorySource {
    /// Check the source has the required structure
    fn validate(&self, path: &Path) -> TpromptsResult<()>;

    /// Make the working copy exist and be current; returns its path
    fn materialize(&self, record: &RepositoryRecord) -> TpromptsResult<PathBuf>;

    /// Existing working copy for `record`
    fn working_path(&self, record: &RepositoryRecord) -> TpromptsResult<PathBuf> {
        let path = record
            .working_path()
            .ok_or_else(|| TpromptsError::DirectoryNotFound {
                path: PathBuf::from(&record.origin),
            })?;
        if !path.is_dir() {
            return Err(TpromptsError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(path.to_path_buf())
    }

    fn checkout_version(&self, record: &RepositoryRecord, _version: &str) -> TpromptsResult<()> {
        Err(not_versioned(record))
    }

    fn current_version(&self, record: &RepositoryRecord) -> TpromptsResult<String> {
        Err(not_versioned(record))
    }

    fn list_versions(&self, record: &RepositoryRecord) -> TpromptsResult<VersionList> {
        Err(not_versioned(record))
    }
}

fn not_versioned(record: &RepositoryRecord) -> TpromptsError {
    TpromptsError::NotVersioned {
        name: record.name.clone(),
    }
}
