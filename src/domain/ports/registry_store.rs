//! RegistryStore port
//!
//! Persists the repository registry at `~/.tprompts/repos.json`.
//! The store hands out immutable snapshots; mutations are pure transforms on
//! [`RegistryState`] applied inside [`RegistryStore::update`].

use std::path::PathBuf;

use crate::domain::entities::RegistryState;
use crate::error::TpromptsResult;

pub trait RegistryStore: Send + Sync {
    fn load(&self) -> Result<RegistryState, RegistryError>;

    fn save(&self, state: &RegistryState) -> Result<(), RegistryError>;

    /// Read-modify-write. `apply` sees the freshly loaded state; its result is
    /// persisted only when it returns `Ok`.
    fn update(
        &self,
        apply: &mut dyn FnMut(RegistryState) -> TpromptsResult<RegistryState>,
    ) -> TpromptsResult<RegistryState> {
        let state = apply(self.load()?)?;
        self.save(&state)?;
        Ok(state)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Failed to access registry: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize registry: {message}")]
    SerializationError { message: String },

    #[error(
        "registry file corrupted: {path}\n  → Fix: Repair or delete the file and register repositories again\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
