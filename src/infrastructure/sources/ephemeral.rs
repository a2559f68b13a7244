//! Ephemeral source for installs straight from a URL
//!
//! The repository is cloned into a fresh temp directory that lives exactly as
//! long as the returned [`CleanupGuard`].

use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::TempDir;

use crate::domain::entities::{RepositoryKind, RepositoryMetadata, RepositoryRecord, MANIFEST_FILE};
use crate::domain::ports::VersionControl;
use crate::error::{TpromptsError, TpromptsResult};

const TEMP_PREFIX: &str = "tprompts-url-";

/// Owns the temp directory of an ephemeral checkout
#[derive(Debug)]
pub struct CleanupGuard {
    dir: Option<TempDir>,
}

impl CleanupGuard {
    fn new(dir: TempDir) -> Self {
        Self { dir: Some(dir) }
    }

    pub fn path(&self) -> Option<&Path> {
        self.dir.as_ref().map(TempDir::path)
    }

    /// Delete the temp directory; failures are logged
    pub fn cleanup(mut self) {
        self.close();
    }

    fn close(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                log::warn!("Failed to clean up temporary directory {}: {}", path.display(), e);
            }
        }
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        self.close();
    }
}

#[derive(Debug)]
pub struct EphemeralCheckout {
    /// Transient record; never registered
    pub record: RepositoryRecord,
    pub prompt_dir: PathBuf,
    pub guard: CleanupGuard,
}

pub struct EphemeralSource<'a, VC: VersionControl + ?Sized> {
    vcs: &'a VC,
    temp_root: Option<PathBuf>,
}

impl<'a, VC: VersionControl + ?Sized> EphemeralSource<'a, VC> {
    pub fn new(vcs: &'a VC) -> Self {
        Self {
            vcs,
            temp_root: None,
        }
    }

    /// Create temp directories under `root` instead of the system temp dir
    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(root.into());
        self
    }

    /// Clone the repository behind `url` and locate `prompt_path` in it
    pub fn fetch(&self, url: &str, prompt_path: &str, version: Option<&str>) -> TpromptsResult<EphemeralCheckout> {
        let (repo_url, repo_name) = clone_url(url)?;

        let builder = {
            let mut b = tempfile::Builder::new();
            b.prefix(TEMP_PREFIX);
            b
        };
        let temp = match &self.temp_root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        let repo_path = temp.path().join(&repo_name);
        // Dropping the guard on any early return removes the directory
        let guard = CleanupGuard::new(temp);

        log::info!("Downloading repository from {}", repo_url);
        self.vcs.clone_repo(&repo_url, &repo_path)?;
        if let Some(version) = version {
            self.vcs.checkout(&repo_path, version)?;
        }

        let prompt_dir = repo_path.join(prompt_path);
        if !prompt_dir.is_dir() || !prompt_dir.join(MANIFEST_FILE).is_file() {
            return Err(TpromptsError::PromptNotFound {
                prompt: prompt_path.to_string(),
                repository: repo_url,
            });
        }

        let record = RepositoryRecord {
            name: format!("url-{}", repo_name),
            origin: repo_url,
            kind: RepositoryKind::Versioned,
            local_path: Some(repo_path),
            last_updated_at: Some(Utc::now()),
            current_version: version.map(str::to_string),
            requested_version: version.map(str::to_string),
            metadata: Some(RepositoryMetadata {
                temporary: true,
                original_url: Some(url.to_string()),
                ..RepositoryMetadata::default()
            }),
        };

        Ok(EphemeralCheckout {
            record,
            prompt_dir,
            guard,
        })
    }
}

/// Canonical clone URL and repository name for a prompt URL.
///
/// `https://github.com/acme/prompts/tree/main/react` becomes
/// `("https://github.com/acme/prompts.git", "prompts")`.
pub fn clone_url(url: &str) -> TpromptsResult<(String, String)> {
    let invalid = || TpromptsError::InvalidSourceUrl {
        url: url.to_string(),
    };

    let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
    let path = rest.split(['?', '#']).next().unwrap_or(rest);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < 3 {
        return Err(invalid());
    }

    let (host, user) = (segments[0], segments[1]);
    let repo = segments[2].trim_end_matches(".git");
    if scheme.is_empty() || repo.is_empty() {
        return Err(invalid());
    }

    Ok((
        format!("{}://{}/{}/{}.git", scheme, host, user, repo),
        repo.to_string(),
    ))
}
