//! Registry entity
//!
//! The set of registered repositories plus the optional default. Every
//! mutation consumes the old state and returns the new one, so the
//! persisted snapshot is only ever replaced as a whole.

use chrono::{DateTime, Utc};

use crate::domain::entities::{RepositoryMetadata, RepositoryRecord};
use crate::error::{TpromptsError, TpromptsResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryState {
    repositories: Vec<RepositoryRecord>,
    default_repository: Option<String>,
}

impl RegistryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted parts, dropping a dangling default
    pub fn from_parts(
        repositories: Vec<RepositoryRecord>,
        default_repository: Option<String>,
    ) -> Self {
        let default_repository =
            default_repository.filter(|name| repositories.iter().any(|r| &r.name == name));
        Self {
            repositories,
            default_repository,
        }
    }

    pub fn get(&self, name: &str) -> Option<&RepositoryRecord> {
        self.repositories.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Records in insertion order
    pub fn all(&self) -> &[RepositoryRecord] {
        &self.repositories
    }

    pub fn default_name(&self) -> Option<&str> {
        self.default_repository.as_deref()
    }

    pub fn default_record(&self) -> Option<&RepositoryRecord> {
        self.default_repository
            .as_deref()
            .and_then(|name| self.get(name))
    }

    pub fn with_registered(mut self, record: RepositoryRecord) -> TpromptsResult<Self> {
        if self.contains(&record.name) {
            return Err(TpromptsError::DuplicateRepository { name: record.name });
        }
        self.repositories.push(record);
        Ok(self)
    }

    pub fn without(mut self, name: &str) -> TpromptsResult<Self> {
        let position = self.position(name)?;
        self.repositories.remove(position);
        if self.default_repository.as_deref() == Some(name) {
            self.default_repository = None;
        }
        Ok(self)
    }

    pub fn with_default(mut self, name: &str) -> TpromptsResult<Self> {
        self.position(name)?;
        self.default_repository = Some(name.to_string());
        Ok(self)
    }

    pub fn with_metadata(
        mut self,
        name: &str,
        metadata: Option<RepositoryMetadata>,
        now: DateTime<Utc>,
    ) -> TpromptsResult<Self> {
        let position = self.position(name)?;
        let record = &mut self.repositories[position];
        record.metadata = metadata;
        record.last_updated_at = Some(now);
        Ok(self)
    }

    /// Replace an existing record, keeping its position
    pub fn with_record(mut self, record: RepositoryRecord) -> TpromptsResult<Self> {
        let position = self.position(&record.name)?;
        self.repositories[position] = record;
        Ok(self)
    }

    fn position(&self, name: &str) -> TpromptsResult<usize> {
        self.repositories
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| TpromptsError::RepositoryNotFound {
                name: name.to_string(),
            })
    }
}
