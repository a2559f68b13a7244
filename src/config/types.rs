//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_PROTECTED_DIRS;
use crate::error::TpromptsResult;
use crate::infrastructure::fs::expand_home;
use crate::infrastructure::vcs::GitTimeouts;

use super::loader::{self, ConfigWarning};

/// Git operation time budgets, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub probe_secs: u64,
    pub clone_secs: u64,
    pub fetch_secs: u64,
    pub checkout_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            probe_secs: 30,
            clone_secs: 120,
            fetch_secs: 60,
            checkout_secs: 30,
        }
    }
}

impl TimeoutConfig {
    pub fn git_timeouts(&self) -> GitTimeouts {
        // Zero would make every call time out immediately
        let secs = |s: u64| Duration::from_secs(s.max(1));
        GitTimeouts {
            probe: secs(self.probe_secs),
            clone: secs(self.clone_secs),
            fetch: secs(self.fetch_secs),
            checkout: secs(self.checkout_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Editor used when `install`/`remove` get none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_editor: Option<String>,

    /// Where versioned repositories are cloned; `<home>/repositories` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories_path: Option<PathBuf>,

    /// Directory names never pruned after removals
    pub protected_dirs: Vec<String>,

    pub timeouts: TimeoutConfig,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            default_editor: None,
            repositories_path: None,
            protected_dirs: DEFAULT_PROTECTED_DIRS.iter().map(|s| s.to_string()).collect(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

impl UserConfig {
    /// Load `config.toml` from the tprompts home; defaults when absent
    pub fn load(home: &Path) -> TpromptsResult<(Self, Vec<ConfigWarning>)> {
        let path = home.join(loader::CONFIG_FILE);
        if !path.exists() {
            return Ok((Self::default(), Vec::new()));
        }
        loader::load_with_warnings(&path)
    }

    /// Checkout root for versioned repositories
    pub fn repositories_dir(&self, home: &Path) -> PathBuf {
        match &self.repositories_path {
            Some(path) => expand_home(path),
            None => home.join("repositories"),
        }
    }
}
