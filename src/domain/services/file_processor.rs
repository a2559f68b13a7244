//! File processor - the installation engine
//!
//! Expands an editor mapping into concrete [`InstallationTarget`]s, writes
//! them, or removes what a prompt/editor combination would have written.
//! Writes and removals are per target: one failure is recorded and the
//! remaining targets are still processed.

use std::path::{Path, PathBuf};

use crate::domain::entities::{EditorMapping, FileRule, InstallationTarget, RuleKind};
use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::services::DirectoryPruner;
use crate::domain::value_objects::path;

/// Why a manifest entry produced no targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Source file or directory does not exist
    MissingSource,
    /// Rule declared a kind that does not match the source on disk
    KindMismatch { declared: RuleKind },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingSource => write!(f, "source not found"),
            SkipReason::KindMismatch { declared } => {
                write!(f, "rule expects a {} source", declared)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub relative_path: String,
    pub source_path: PathBuf,
    pub reason: SkipReason,
}

/// Targets computed for one prompt/editor pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetPlan {
    pub targets: Vec<InstallationTarget>,
    pub skipped: Vec<SkippedEntry>,
}

impl TargetPlan {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of writing or removing a batch of targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub succeeded: Vec<PathBuf>,
    pub failed: Vec<TargetFailure>,
    /// Directories pruned after removals
    pub pruned: Vec<PathBuf>,
}

impl ApplyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn succeeded_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    fn add_failure(&mut self, path: &Path, message: String) {
        self.failed.push(TargetFailure {
            path: path.to_path_buf(),
            message,
        });
    }
}

pub struct FileProcessor<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> FileProcessor<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Expand `mapping` into targets under `install_root`.
    ///
    /// Entries keep manifest order; files inside a directory keep listing
    /// order. Missing sources are skipped, unreadable ones abort.
    pub fn compute_targets(
        &self,
        prompt_dir: &Path,
        mapping: &EditorMapping,
        install_root: &Path,
    ) -> FsResult<TargetPlan> {
        let mut plan = TargetPlan::default();

        for (relative_path, rule) in mapping.entries() {
            let source_path = prompt_dir.join(relative_path);

            if !self.fs.exists(&source_path) {
                log::warn!("Source not found, skipping: {}", source_path.display());
                plan.skipped.push(SkippedEntry {
                    relative_path: relative_path.to_string(),
                    source_path,
                    reason: SkipReason::MissingSource,
                });
                continue;
            }

            let is_dir = self.fs.is_dir(&source_path);
            if let Some(declared) = rule.kind {
                let actual = if is_dir {
                    RuleKind::Directory
                } else {
                    RuleKind::File
                };
                if declared != actual {
                    log::warn!(
                        "Rule for '{}' expects a {} but found a {}, skipping",
                        relative_path,
                        declared,
                        actual
                    );
                    plan.skipped.push(SkippedEntry {
                        relative_path: relative_path.to_string(),
                        source_path,
                        reason: SkipReason::KindMismatch { declared },
                    });
                    continue;
                }
            }

            let destination = self.destination(install_root, &rule.location);
            if is_dir {
                for file in self.files_under(&source_path)? {
                    let relative = file.strip_prefix(&source_path).unwrap_or(&file);
                    let target_path = destination.join(relative);
                    plan.targets.push(self.target(file.clone(), target_path, rule)?);
                }
            } else {
                plan.targets
                    .push(self.target(source_path, destination, rule)?);
            }
        }

        Ok(plan)
    }

    /// Write every target, overwriting existing files
    pub fn install(&self, targets: &[InstallationTarget]) -> ApplyReport {
        let mut report = ApplyReport::new();
        for target in targets {
            match self.fs.write(&target.target_path, &target.content) {
                Ok(()) => report.succeeded.push(target.target_path.clone()),
                Err(e) => {
                    log::warn!("Failed to write {}: {}", target.target_path.display(), e);
                    report.add_failure(&target.target_path, e.to_string());
                }
            }
        }
        report
    }

    /// Targets whose destination currently exists as a file
    pub fn removal_set(&self, targets: &[InstallationTarget]) -> Vec<InstallationTarget> {
        targets
            .iter()
            .filter(|t| self.fs.exists(&t.target_path) && !self.fs.is_dir(&t.target_path))
            .cloned()
            .collect()
    }

    /// Delete each target, then prune directories it leaves empty
    pub fn remove(&self, targets: &[InstallationTarget], pruner: &DirectoryPruner) -> ApplyReport {
        let mut report = ApplyReport::new();
        for target in targets {
            if let Err(e) = self.fs.remove(&target.target_path) {
                log::warn!("Failed to remove {}: {}", target.target_path.display(), e);
                report.add_failure(&target.target_path, e.to_string());
                continue;
            }
            report.succeeded.push(target.target_path.clone());
            if let Some(parent) = target.target_path.parent() {
                report.pruned.extend(pruner.prune(self.fs, parent));
            }
        }
        report
    }

    fn destination(&self, install_root: &Path, location: &str) -> PathBuf {
        if location == "~" || location.starts_with("~/") {
            path::normalize(&self.fs.expand_home(Path::new(location)))
        } else {
            path::resolve(install_root, Path::new(location))
        }
    }

    fn target(
        &self,
        source_path: PathBuf,
        target_path: PathBuf,
        rule: &FileRule,
    ) -> FsResult<InstallationTarget> {
        let raw = self.fs.read(&source_path)?;
        Ok(InstallationTarget {
            content: rule.wrap(&raw),
            source_path,
            target_path,
            prefix: rule.prefix.clone().filter(|p| !p.is_empty()),
            suffix: rule.suffix.clone().filter(|s| !s.is_empty()),
        })
    }

    /// Every regular file beneath `dir`, depth-first in listing order
    fn files_under(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![self.fs.read_dir(dir)?.into_iter()];

        loop {
            let next = match pending.last_mut() {
                Some(entries) => entries.next(),
                None => break,
            };
            match next {
                Some(entry) if entry.is_dir => {
                    pending.push(self.fs.read_dir(&entry.path)?.into_iter())
                }
                Some(entry) if entry.is_symlink && self.fs.is_dir(&entry.path) => {
                    log::warn!("Skipping directory symlink: {}", entry.path.display());
                }
                Some(entry) if entry.is_symlink && !self.fs.exists(&entry.path) => {
                    log::warn!("Skipping dangling symlink: {}", entry.path.display());
                }
                Some(entry) => files.push(entry.path),
                None => {
                    pending.pop();
                }
            }
        }
        Ok(files)
    }
}
