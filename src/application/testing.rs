//! Shared fakes for application tests

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::application::RegistryUseCase;
use crate::domain::entities::RegistryState;
use crate::domain::ports::{RegistryError, RegistryStore};

#[derive(Default)]
pub(crate) struct InMemoryRegistryStore {
    state: Mutex<RegistryState>,
}

impl RegistryStore for InMemoryRegistryStore {
    fn load(&self) -> Result<RegistryState, RegistryError> {
        Ok(self.state.lock().unwrap().clone())
    }

    fn save(&self, state: &RegistryState) -> Result<(), RegistryError> {
        *self.state.lock().unwrap() = state.clone();
        Ok(())
    }
}

pub(crate) fn registry() -> RegistryUseCase {
    RegistryUseCase::new(Arc::new(InMemoryRegistryStore::default()))
}

/// Lay out a local repository with one `react` prompt:
///
/// ```text
/// react/tprompts.json
/// react/rules/a.md
/// react/rules/nested/b.md
/// react/AGENTS.md
/// ```
pub(crate) fn write_local_repository(root: &Path) {
    let prompt = root.join("react");
    fs::create_dir_all(prompt.join("rules/nested")).unwrap();
    fs::write(prompt.join("rules/a.md"), "A").unwrap();
    fs::write(prompt.join("rules/nested/b.md"), "B").unwrap();
    fs::write(prompt.join("AGENTS.md"), "BODY").unwrap();
    fs::write(
        prompt.join("tprompts.json"),
        r#"{
            "name": "react",
            "description": "React rules",
            "version": "1.0.0",
            "editors": {
                "cursor": {
                    "rules": { "location": ".cursor/rules/" },
                    "AGENTS.md": { "location": "AGENTS.md", "prefix": "PRE\n", "suffix": "\nPOST" }
                },
                "windsurf": {
                    "rules": { "location": ".windsurf/rules/" }
                }
            }
        }"#,
    )
    .unwrap();
}
