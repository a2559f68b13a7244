//! Update Use Case
//!
//! Pulls versioned repositories and re-applies their requested version.
//! Local repositories are skipped.

use std::path::PathBuf;

use chrono::Utc;

use crate::application::RegistryUseCase;
use crate::domain::entities::RepositoryRecord;
use crate::domain::ports::{RepositorySource, VersionControl};
use crate::error::TpromptsResult;
use crate::infrastructure::repositories::read_repository_metadata;
use crate::infrastructure::sources::VersionedSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Pulled; `version` is the active branch, tag or commit afterwards
    Updated { version: Option<String> },
    SkippedLocal,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub name: String,
    pub status: UpdateStatus,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSummary {
    pub outcomes: Vec<UpdateOutcome>,
}

impl UpdateSummary {
    pub fn updated_count(&self) -> usize {
        self.count(|s| matches!(s, UpdateStatus::Updated { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|s| matches!(s, UpdateStatus::SkippedLocal))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, UpdateStatus::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&UpdateStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

pub struct UpdateUseCase<'a> {
    registry: &'a RegistryUseCase,
    vcs: &'a dyn VersionControl,
    repositories_dir: PathBuf,
}

impl<'a> UpdateUseCase<'a> {
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

    /// Update one repository.
    ///
    /// `version` replaces the requested version; without it the stored
    /// requested version (if any) is checked out again.
    pub fn update_one(&self, name: &str, version: Option<&str>) -> TpromptsResult<UpdateStatus> {
        let record = self.registry.require(name)?;
        if !record.is_versioned() {
            if version.is_some() {
                log::warn!("Version ignored for local repository '{}'", name);
            }
            return Ok(UpdateStatus::SkippedLocal);
        }

        let record = self.refresh(record, version)?;
        Ok(UpdateStatus::Updated {
            version: record.current_version,
        })
    }

    /// Update every repository, continuing past failures
    pub fn update_all(&self, version: Option<&str>) -> TpromptsResult<UpdateSummary> {
        let mut summary = UpdateSummary::default();
        for record in self.registry.list()? {
            let status = match self.update_one(&record.name, version) {
                Ok(status) => status,
                Err(e) => {
                    log::warn!("Failed to update '{}': {}", record.name, e);
                    UpdateStatus::Failed {
                        message: e.to_string(),
                    }
                }
            };
            summary.outcomes.push(UpdateOutcome {
                name: record.name,
                status,
            });
        }
        Ok(summary)
    }

    fn refresh(&self, mut record: RepositoryRecord, version: Option<&str>) -> TpromptsResult<RepositoryRecord> {
        let source = VersionedSource::new(self.vcs, &self.repositories_dir);
        let path = source.materialize(&record)?;
        record.local_path = Some(path.clone());

        let target = version
            .map(str::to_string)
            .or_else(|| record.requested_version.clone());
        if let Some(target) = &target {
            source.checkout_version(&record, target)?;
        }

        let active = source.current_version(&record).ok().or(target.clone());

        if version.is_some() {
            record.requested_version = target;
        }
        record.current_version = active;
        record.last_updated_at = Some(Utc::now());
        record.metadata = read_repository_metadata(&path).or(record.metadata);

        self.registry.save_record(record)
    }
}
