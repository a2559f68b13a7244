//! Versioned (git) source
//!
//! Checkouts live at `<repositories_path>/<name>`. A failed clone, checkout
//! or validation removes the directory before the error surfaces.

use std::path::{Path, PathBuf};

use super::{remove_quietly, validate_structure};
use crate::domain::entities::RepositoryRecord;
use crate::domain::ports::{Head, RepositorySource, VersionControl, VersionList};
use crate::error::TpromptsResult;

pub struct VersionedSource<'a, VC: VersionControl + ?Sized> {
    vcs: &'a VC,
    repositories_path: PathBuf,
}

impl<'a, VC: VersionControl + ?Sized> VersionedSource<'a, VC> {
    pub fn new(vcs: &'a VC, repositories_path: impl Into<PathBuf>) -> Self {
        Self {
            vcs,
            repositories_path: repositories_path.into(),
        }
    }

    /// Managed checkout directory for `name`
    pub fn checkout_path(&self, name: &str) -> PathBuf {
        self.repositories_path.join(name)
    }

    /// Clone `url` as `name`, optionally switching to `version`.
    ///
    /// A stale directory from an earlier attempt is replaced.
    pub fn clone_into(&self, name: &str, url: &str, version: Option<&str>) -> TpromptsResult<PathBuf> {
        std::fs::create_dir_all(&self.repositories_path)?;
        let path = self.checkout_path(name);
        if path.exists() {
            std::fs::remove_dir_all(&path)?;
        }

        let result = self
            .vcs
            .probe(url)
            .and_then(|_| self.vcs.clone_repo(url, &path))
            .and_then(|_| match version {
                Some(version) => self.vcs.checkout(&path, version),
                None => Ok(()),
            })
            .and_then(|_| self.validate(&path));

        match result {
            Ok(()) => Ok(path),
            Err(e) => {
                remove_quietly(&path);
                Err(e)
            }
        }
    }

    /// Bring an existing checkout up to date.
    ///
    /// Branches are pulled; a detached head (tag or commit) only fetches.
    pub fn refresh(&self, path: &Path) -> TpromptsResult<()> {
        match self.vcs.head(path)? {
            Head::Branch(_) => self.vcs.pull(path),
            Head::Detached(_) => self.vcs.fetch(path),
        }
    }
}

impl<VC: VersionControl + ?Sized> RepositorySource for VersionedSource<'_, VC> {
    fn validate(&self, path: &Path) -> TpromptsResult<()> {
        validate_structure(path)
    }

    fn materialize(&self, record: &RepositoryRecord) -> TpromptsResult<PathBuf> {
        match record.working_path() {
            Some(path) if path.is_dir() => {
                self.refresh(path)?;
                Ok(path.to_path_buf())
            }
            _ => self.clone_into(
                &record.name,
                &record.origin,
                record.requested_version.as_deref(),
            ),
        }
    }

    fn checkout_version(&self, record: &RepositoryRecord, version: &str) -> TpromptsResult<()> {
        let path = self.working_path(record)?;
        self.vcs.fetch(&path)?;
        self.vcs.checkout(&path, version)
    }

    fn current_version(&self, record: &RepositoryRecord) -> TpromptsResult<String> {
        let path = self.working_path(record)?;
        Ok(self.vcs.head(&path)?.name().to_string())
    }

    fn list_versions(&self, record: &RepositoryRecord) -> TpromptsResult<VersionList> {
        let path = self.working_path(record)?;
        self.vcs.fetch(&path)?;
        Ok(VersionList {
            branches: self.vcs.remote_branches(&path)?,
            tags: self.vcs.tags(&path)?,
        })
    }
}
