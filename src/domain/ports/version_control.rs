//! VersionControl port
//!
//! Narrow seam over the git executable. Every call is bounded in time and
//! reports failures as `Timeout`, `RemoteUnreachable`, `SubprocessFailed`
//! or `VersionNotFound`.

use std::path::Path;

use crate::error::TpromptsResult;

/// What `HEAD` points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Branch(String),
    /// Short commit id
    Detached(String),
}

impl Head {
    pub fn name(&self) -> &str {
        match self {
            Head::Branch(name) | Head::Detached(name) => name,
        }
    }
}

pub trait VersionControl {
    /// Check that `url` answers (short timeout)
    fn probe(&self, url: &str) -> TpromptsResult<()>;

    fn clone_repo(&self, url: &str, dest: &Path) -> TpromptsResult<()>;

    /// Fetch all remotes and tags
    fn fetch(&self, repo: &Path) -> TpromptsResult<()>;

    fn pull(&self, repo: &Path) -> TpromptsResult<()>;

    /// Switch the working tree; `VersionNotFound` when `reference` does not resolve
    fn checkout(&self, repo: &Path, reference: &str) -> TpromptsResult<()>;

    fn head(&self, repo: &Path) -> TpromptsResult<Head>;

    /// Remote branch names without the remote prefix
    fn remote_branches(&self, repo: &Path) -> TpromptsResult<Vec<String>>;

    /// Tags, newest version first
    fn tags(&self, repo: &Path) -> TpromptsResult<Vec<String>>;
}
