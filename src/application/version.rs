//! Version Use Case
//!
//! Show, list and switch the checked-out version of a versioned repository.

use std::path::PathBuf;

use chrono::Utc;

use crate::application::resolver::source_for;
use crate::application::RegistryUseCase;
use crate::domain::entities::RepositoryRecord;
use crate::domain::ports::{VersionControl, VersionList};
use crate::error::TpromptsResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub repository: RepositoryRecord,
    pub current: String,
    /// Set when it differs from `current`
    pub requested: Option<String>,
}

pub struct VersionUseCase<'a> {
    registry: &'a RegistryUseCase,
    vcs: &'a dyn VersionControl,
    repositories_dir: PathBuf,
}

impl<'a> VersionUseCase<'a> {
    pub fn new(
        registry: &'a RegistryUseCase,
        vcs: &'a dyn VersionControl,
        repositories_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            vcs,
            repositories_dir: repositories_dir.into(),
        }
    }

    pub fn current(&self, name: &str) -> TpromptsResult<VersionInfo> {
        let record = self.registry.require(name)?;
        let current = source_for(&record, self.vcs, &self.repositories_dir).current_version(&record)?;
        let requested = record
            .requested_version
            .clone()
            .filter(|requested| *requested != current);
        Ok(VersionInfo {
            repository: record,
            current,
            requested,
        })
    }

    pub fn list(&self, name: &str) -> TpromptsResult<VersionList> {
        let record = self.registry.require(name)?;
        source_for(&record, self.vcs, &self.repositories_dir).list_versions(&record)
    }

    /// Check out `version` and record it as both current and requested
    pub fn checkout(&self, name: &str, version: &str) -> TpromptsResult<RepositoryRecord> {
        let mut record = self.registry.require(name)?;
        source_for(&record, self.vcs, &self.repositories_dir).checkout_version(&record, version)?;

        record.current_version = Some(version.to_string());
        record.requested_version = Some(version.to_string());
        record.last_updated_at = Some(Utc::now());
        self.registry.save_record(record)
    }
}
