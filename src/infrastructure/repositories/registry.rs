//! JSON Registry Store
//!
//! Persists the registry at `~/.tprompts/repos.json`:
//!
//! ```json
//! { "repositories": { "<name>": { "url": "...", "type": "git", ... } },
//!   "defaultRepository": "<name>" }
//! ```
//!
//! Repository order on disk is the registration order.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    RegistryState, RepositoryKind, RepositoryMetadata, RepositoryRecord,
};
use crate::domain::ports::{RegistryError, RegistryStore};
use crate::error::{TpromptsError, TpromptsResult};

/// File name of the registry inside the tprompts home
pub const REGISTRY_FILE: &str = "repos.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonRepository {
    url: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    requested_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<RepositoryMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonRegistry {
    #[serde(default)]
    repositories: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_repository: Option<String>,
}

pub struct JsonRegistryStore {
    path: PathBuf,
}

impl JsonRegistryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store rooted in a tprompts home directory
    pub fn in_home(home: &Path) -> Self {
        Self::new(home.join(REGISTRY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn lock(&self) -> Result<fs::File, RegistryError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(access)?;
        }
        let lock_file = fs::File::create(&lock_path).map_err(access)?;
        lock_file.lock_exclusive().map_err(access)?;
        Ok(lock_file)
    }

    fn load_from_disk(&self) -> Result<RegistryState, RegistryError> {
        if !self.path.exists() {
            return Ok(RegistryState::new());
        }

        let content = fs::read_to_string(&self.path).map_err(access)?;
        if content.trim().is_empty() {
            return Ok(RegistryState::new());
        }

        let json_reg: JsonRegistry =
            serde_json::from_str(&content).map_err(|e| self.corrupted(e.to_string()))?;

        from_json(json_reg).map_err(|message| self.corrupted(message))
    }

    fn save_to_disk(&self, state: &RegistryState) -> Result<(), RegistryError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(access)?;

        let content = serde_json::to_string_pretty(&to_json(state)?).map_err(|e| {
            RegistryError::SerializationError {
                message: e.to_string(),
            }
        })?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(access)?;
        tmp.write_all(content.as_bytes()).map_err(access)?;
        tmp.write_all(b"\n").map_err(access)?;
        tmp.persist(&self.path).map_err(|e| access(e.error))?;
        Ok(())
    }

    fn corrupted(&self, message: String) -> RegistryError {
        RegistryError::Corrupted {
            path: self.path.clone(),
            message,
        }
    }
}

impl RegistryStore for JsonRegistryStore {
    fn load(&self) -> Result<RegistryState, RegistryError> {
        self.load_from_disk()
    }

    fn save(&self, state: &RegistryState) -> Result<(), RegistryError> {
        let lock_file = self.lock()?;
        let result = self.save_to_disk(state);
        let _ = lock_file.unlock();
        result
    }

    fn update(
        &self,
        apply: &mut dyn FnMut(RegistryState) -> TpromptsResult<RegistryState>,
    ) -> TpromptsResult<RegistryState> {
        let lock_file = self.lock()?;

        let result = self
            .load_from_disk()
            .map_err(TpromptsError::from)
            .and_then(|state| apply(state))
            .and_then(|state| {
                self.save_to_disk(&state)?;
                Ok(state)
            });

        let _ = lock_file.unlock();
        result
    }
}

fn access(e: std::io::Error) -> RegistryError {
    RegistryError::AccessError {
        message: e.to_string(),
    }
}

fn from_json(json_registry: JsonRegistry) -> Result<RegistryState, String> {
    let mut repositories = Vec::with_capacity(json_registry.repositories.len());
    for (name, value) in json_registry.repositories {
        let entry: JsonRepository =
            serde_json::from_value(value).map_err(|e| format!("repository '{}': {}", name, e))?;
        let kind = RepositoryKind::parse(&entry.kind)
            .ok_or_else(|| format!("repository '{}': unknown type '{}'", name, entry.kind))?;
        repositories.push(RepositoryRecord {
            name,
            origin: entry.url,
            kind,
            local_path: entry.path,
            last_updated_at: entry.last_updated,
            current_version: entry.current_version,
            requested_version: entry.requested_version,
            metadata: entry.metadata,
        });
    }
    Ok(RegistryState::from_parts(
        repositories,
        json_registry.default_repository,
    ))
}

fn to_json(state: &RegistryState) -> Result<JsonRegistry, RegistryError> {
    let mut repositories = serde_json::Map::new();
    for record in state.all() {
        let entry = JsonRepository {
            url: record.origin.clone(),
            kind: record.kind.as_str().to_string(),
            path: record.local_path.clone(),
            last_updated: record.last_updated_at,
            current_version: record.current_version.clone(),
            requested_version: record.requested_version.clone(),
            metadata: record.metadata.clone(),
        };
        let value =
            serde_json::to_value(entry).map_err(|e| RegistryError::SerializationError {
                message: e.to_string(),
            })?;
        repositories.insert(record.name.clone(), value);
    }
    Ok(JsonRegistry {
        repositories,
        default_repository: state.default_name().map(str::to_string),
    })
}
