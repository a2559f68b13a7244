//! Install/remove orchestration over the file processor

use std::path::Path;

use crate::application::resolver::ResolvedPrompt;
use crate::domain::ports::FileSystem;
use crate::domain::services::{ApplyReport, DirectoryPruner, FileProcessor};
use crate::domain::value_objects::Editor;
use crate::error::TpromptsResult;

use super::result::{InstallPlan, RemovalPlan};

pub struct InstallUseCase<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> InstallUseCase<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Compute targets; nothing is written
    pub fn plan(&self, prompt: &ResolvedPrompt, editor: Editor, install_root: &Path) -> TpromptsResult<InstallPlan> {
        let mapping = prompt.mapping(editor)?;
        let plan = FileProcessor::new(self.fs).compute_targets(&prompt.prompt_dir, mapping, install_root)?;

        let existing = plan
            .targets
            .iter()
            .filter(|t| self.fs.exists(&t.target_path))
            .map(|t| t.target_path.clone())
            .collect();

        Ok(InstallPlan {
            install_root: install_root.to_path_buf(),
            targets: plan.targets,
            skipped: plan.skipped,
            existing,
        })
    }

    /// Write every planned target; per-target failures are reported, not raised
    pub fn execute(&self, plan: &InstallPlan) -> ApplyReport {
        let report = FileProcessor::new(self.fs).install(&plan.targets);
        log::info!(
            "Installed {} file(s), {} failed",
            report.succeeded_count(),
            report.failed_count()
        );
        report
    }
}

pub struct RemoveUseCase<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    protected: Vec<String>,
}

impl<'a, FS: FileSystem + ?Sized> RemoveUseCase<'a, FS> {
    pub fn new(fs: &'a FS, protected: Vec<String>) -> Self {
        Self { fs, protected }
    }

    /// Split the prompt's targets into installed and missing files
    pub fn plan(&self, prompt: &ResolvedPrompt, editor: Editor, install_root: &Path) -> TpromptsResult<RemovalPlan> {
        let mapping = prompt.mapping(editor)?;
        let processor = FileProcessor::new(self.fs);
        let plan = processor.compute_targets(&prompt.prompt_dir, mapping, install_root)?;

        let present = processor.removal_set(&plan.targets);
        let missing = plan
            .targets
            .into_iter()
            .filter(|t| !present.iter().any(|p| p.target_path == t.target_path))
            .collect();

        Ok(RemovalPlan {
            install_root: install_root.to_path_buf(),
            present,
            missing,
            skipped: plan.skipped,
        })
    }

    /// Delete installed files and prune directories left empty
    pub fn execute(&self, plan: &RemovalPlan) -> ApplyReport {
        let pruner = DirectoryPruner::new(&plan.install_root).with_protected(self.protected.iter());
        let report = FileProcessor::new(self.fs).remove(&plan.present, &pruner);
        log::info!(
            "Removed {} file(s), {} failed, pruned {} director(ies)",
            report.succeeded_count(),
            report.failed_count(),
            report.pruned.len()
        );
        report
    }
}
