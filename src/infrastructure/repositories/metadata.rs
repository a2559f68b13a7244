//! Repository metadata reader (`.tprompts-repo.json`)

use std::fs;
use std::path::Path;

use crate::domain::entities::RepositoryMetadata;

/// Optional descriptive file at a repository root
pub const METADATA_FILE: &str = ".tprompts-repo.json";

/// Read the metadata file of `repository`.
///
/// Absent or invalid files yield `None`; invalid ones are logged.
pub fn read_repository_metadata(repository: &Path) -> Option<RepositoryMetadata> {
    let path = repository.join(METADATA_FILE);
    if !path.is_file() {
        return None;
    }

    let parsed = fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()));

    match parsed {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            log::warn!("Invalid repository metadata at {}: {}", path.display(), e);
            None
        }
    }
}
