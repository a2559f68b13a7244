//! Registry Use Case
//!
//! Application-layer orchestration for working with the repository registry.
//! Every mutation is one read-modify-write through [`RegistryStore::update`].

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{RegistryState, RepositoryMetadata, RepositoryRecord};
use crate::domain::ports::RegistryStore;
use crate::error::{TpromptsError, TpromptsResult};

#[derive(Clone)]
pub struct RegistryUseCase {
    store: Arc<dyn RegistryStore>,
}

impl RegistryUseCase {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Insert a new record; `DuplicateRepository` leaves the registry untouched
    pub fn register(&self, mut record: RepositoryRecord) -> TpromptsResult<RepositoryRecord> {
        record.last_updated_at = Some(Utc::now());
        let inserted = record.clone();
        self.store
            .update(&mut |state| state.with_registered(record.clone()))?;
        Ok(inserted)
    }

    /// Remove `name`, clearing the default if it pointed there
    pub fn unregister(&self, name: &str) -> TpromptsResult<RepositoryRecord> {
        let removed = self.require(name)?;
        self.store.update(&mut |state| state.without(name))?;
        Ok(removed)
    }

    pub fn get(&self, name: &str) -> TpromptsResult<Option<RepositoryRecord>> {
        Ok(self.state()?.get(name).cloned())
    }

    /// Like [`get`](Self::get), but absence is `RepositoryNotFound`
    pub fn require(&self, name: &str) -> TpromptsResult<RepositoryRecord> {
        self.get(name)?
            .ok_or_else(|| TpromptsError::RepositoryNotFound {
                name: name.to_string(),
            })
    }

    /// All records in registration order
    pub fn list(&self) -> TpromptsResult<Vec<RepositoryRecord>> {
        Ok(self.state()?.all().to_vec())
    }

    pub fn get_default(&self) -> TpromptsResult<Option<RepositoryRecord>> {
        Ok(self.state()?.default_record().cloned())
    }

    pub fn set_default(&self, name: &str) -> TpromptsResult<()> {
        self.store.update(&mut |state| state.with_default(name))?;
        Ok(())
    }

    /// Replace metadata and refresh `last_updated_at`
    pub fn update_metadata(
        &self,
        name: &str,
        metadata: Option<RepositoryMetadata>,
    ) -> TpromptsResult<RepositoryRecord> {
        let now = Utc::now();
        let state = self
            .store
            .update(&mut |state| state.with_metadata(name, metadata.clone(), now))?;
        Self::find(&state, name)
    }

    /// Persist changed version pointers or paths of an existing record
    pub fn save_record(&self, record: RepositoryRecord) -> TpromptsResult<RepositoryRecord> {
        let name = record.name.clone();
        let state = self
            .store
            .update(&mut |state| state.with_record(record.clone()))?;
        Self::find(&state, &name)
    }

    fn state(&self) -> TpromptsResult<RegistryState> {
        Ok(self.store.load()?)
    }

    fn find(state: &RegistryState, name: &str) -> TpromptsResult<RepositoryRecord> {
        state
            .get(name)
            .cloned()
            .ok_or_else(|| TpromptsError::RepositoryNotFound {
                name: name.to_string(),
            })
    }
}
