//! Local directory source

use std::path::{Path, PathBuf};

use super::validate_structure;
use crate::domain::entities::RepositoryRecord;
use crate::domain::ports::RepositorySource;
use crate::error::{TpromptsError, TpromptsResult};

/// Local directories are never copied; the registered path is read directly
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSource;

impl LocalSource {
    pub fn new() -> Self {
        Self
    }
}

impl RepositorySource for LocalSource {
    fn validate(&self, path: &Path) -> TpromptsResult<()> {
        if !path.exists() {
            return Err(TpromptsError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(TpromptsError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        validate_structure(path)
    }

    fn materialize(&self, record: &RepositoryRecord) -> TpromptsResult<PathBuf> {
        self.working_path(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn validate_accepts_directory_with_prompt() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("react")).unwrap();
        fs::write(dir.path().join("react/tprompts.json"), "{}").unwrap();

        LocalSource::new().validate(dir.path()).unwrap();
    }

    #[test]
    fn validate_rejects_missing_file_and_empty_paths() {
        let dir = tempdir().unwrap();
        let source = LocalSource::new();

        let err = source.validate(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, TpromptsError::DirectoryNotFound { .. }));

        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        let err = source.validate(&file).unwrap_err();
        assert!(matches!(err, TpromptsError::NotADirectory { .. }));

        let err = source.validate(dir.path()).unwrap_err();
        assert!(matches!(err, TpromptsError::NoPromptsFound { .. }));
    }

    #[test]
    fn hidden_prompt_directories_do_not_count() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".drafts")).unwrap();
        fs::write(dir.path().join(".drafts/tprompts.json"), "{}").unwrap();

        let err = LocalSource::new().validate(dir.path()).unwrap_err();
        assert!(matches!(err, TpromptsError::NoPromptsFound { .. }));
    }

    #[test]
    fn materialize_uses_path_in_place() {
        let dir = tempdir().unwrap();
        let record = RepositoryRecord::local("mine", dir.path().to_path_buf());
        assert_eq!(LocalSource::new().materialize(&record).unwrap(), dir.path());
    }

    #[test]
    fn version_operations_are_not_supported() {
        let dir = tempdir().unwrap();
        let record = RepositoryRecord::local("mine", dir.path().to_path_buf());
        let err = LocalSource::new().list_versions(&record).unwrap_err();
        assert!(matches!(err, TpromptsError::NotVersioned { .. }));
    }
}
