//! Install and removal plans

use std::path::PathBuf;

use crate::domain::entities::InstallationTarget;
use crate::domain::services::SkippedEntry;

/// What an install would write
#[derive(Debug, Clone, Default)]
pub struct InstallPlan {
    pub install_root: PathBuf,
    pub targets: Vec<InstallationTarget>,
    /// Manifest entries that produced nothing
    pub skipped: Vec<SkippedEntry>,
    /// Destinations that already exist and will be overwritten
    pub existing: Vec<PathBuf>,
}

impl InstallPlan {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn has_conflicts(&self) -> bool {
        !self.existing.is_empty()
    }
}

/// What a removal would delete
#[derive(Debug, Clone, Default)]
pub struct RemovalPlan {
    pub install_root: PathBuf,
    /// Installed files that will be deleted
    pub present: Vec<InstallationTarget>,
    /// Configured files that are not on disk
    pub missing: Vec<InstallationTarget>,
    pub skipped: Vec<SkippedEntry>,
}

impl RemovalPlan {
    /// Nothing configured at all
    pub fn is_unconfigured(&self) -> bool {
        self.present.is_empty() && self.missing.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}
