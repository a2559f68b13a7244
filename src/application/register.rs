//! Register/Unregister Use Case
//!
//! Adds repositories to the registry after validating them (cloning
//! versioned ones into the managed directory) and removes them again.

use std::path::{Path, PathBuf};

use crate::application::RegistryUseCase;
use crate::domain::entities::{RepositoryKind, RepositoryRecord};
use crate::domain::ports::{RepositorySource, VersionControl};
use crate::domain::value_objects::path;
use crate::error::{TpromptsError, TpromptsResult};
use crate::infrastructure::fs::expand_home;
use crate::infrastructure::repositories::read_repository_metadata;
use crate::infrastructure::sources::{remove_quietly, LocalSource, VersionedSource};

#[derive(Debug, Clone, Default)]
pub struct RegisterOptions {
    /// Git URL or local directory
    pub source: String,
    /// Overrides the name derived from `source`
    pub name: Option<String>,
    pub make_default: bool,
    /// Branch, tag or commit for versioned sources
    pub version: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub record: RepositoryRecord,
    pub made_default: bool,
}

#[derive(Debug, Clone)]
pub struct UnregisterResult {
    pub record: RepositoryRecord,
    pub was_default: bool,
    /// Managed checkout that was deleted
    pub removed_files: Option<PathBuf>,
    /// Deleting the checkout failed; the registration is gone regardless
    pub cleanup_error: Option<String>,
}

pub struct RegisterUseCase<'a> {
    registry: &'a RegistryUseCase,
    vcs: &'a dyn VersionControl,
    repositories_dir: PathBuf,
    working_dir: PathBuf,
}

impl<'a> RegisterUseCase<'a> {
    pub fn new(
        registry: &'a RegistryUseCase,
        vcs: &'a dyn VersionControl,
        repositories_dir: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            vcs,
            repositories_dir: repositories_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    pub fn register(&self, options: &RegisterOptions) -> TpromptsResult<RegisterResult> {
        let source = options.source.trim();
        let kind = RepositoryKind::detect(source);
        let name = match &options.name {
            Some(name) => name.trim().to_string(),
            None => derive_name(source),
        };
        validate_name(&name)?;

        if self.registry.get(&name)?.is_some() {
            return Err(TpromptsError::DuplicateRepository { name });
        }

        let mut record = match kind {
            RepositoryKind::Versioned => self.prepare_versioned(&name, source, options.version.as_deref())?,
            RepositoryKind::Local => {
                if options.version.is_some() {
                    log::warn!("Ignoring version for local repository '{}'", name);
                }
                let path = path::resolve(&self.working_dir, &expand_home(Path::new(source)));
                LocalSource::new().validate(&path)?;
                RepositoryRecord::local(&name, path)
            }
        };
        record.metadata = record.working_path().and_then(read_repository_metadata);

        let record = match self.registry.register(record.clone()) {
            Ok(record) => record,
            Err(e) => {
                if record.is_versioned() {
                    if let Some(path) = record.working_path() {
                        remove_quietly(path);
                    }
                }
                return Err(e);
            }
        };

        if options.make_default {
            self.registry.set_default(&record.name)?;
        }

        log::info!("Registered {} repository '{}'", record.kind, record.name);
        Ok(RegisterResult {
            record,
            made_default: options.make_default,
        })
    }

    /// Checkout that unregistering `record` would delete
    pub fn managed_checkout(&self, record: &RepositoryRecord) -> Option<PathBuf> {
        if !record.is_versioned() {
            return None;
        }
        let path = record.working_path()?;
        // Only directories tprompts created itself are ever deleted
        if path.starts_with(&self.repositories_dir) && path.is_dir() {
            Some(path.to_path_buf())
        } else {
            None
        }
    }

    pub fn unregister(&self, name: &str, keep_files: bool) -> TpromptsResult<UnregisterResult> {
        let record = self.registry.require(name)?;
        let was_default = self
            .registry
            .get_default()?
            .is_some_and(|d| d.name == record.name);

        let mut removed_files = None;
        let mut cleanup_error = None;
        if !keep_files {
            if let Some(path) = self.managed_checkout(&record) {
                match std::fs::remove_dir_all(&path) {
                    Ok(()) => removed_files = Some(path),
                    Err(e) => {
                        log::warn!("Failed to remove {}: {}", path.display(), e);
                        cleanup_error = Some(format!("{}: {}", path.display(), e));
                    }
                }
            }
        }

        let record = self.registry.unregister(name)?;
        Ok(UnregisterResult {
            record,
            was_default,
            removed_files,
            cleanup_error,
        })
    }

    fn prepare_versioned(&self, name: &str, url: &str, version: Option<&str>) -> TpromptsResult<RepositoryRecord> {
        let source = VersionedSource::new(self.vcs, &self.repositories_dir);
        let path = source.clone_into(name, url, version)?;

        let mut record = RepositoryRecord::versioned(name, url, path.clone(), version.map(str::to_string));
        match self.vcs.head(&path) {
            Ok(head) => record.current_version = Some(head.name().to_string()),
            Err(e) => log::debug!("Could not read HEAD of {}: {}", path.display(), e),
        }
        Ok(record)
    }
}

/// Last path segment of `source`, without a `.git` suffix
pub fn derive_name(source: &str) -> String {
    source
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\', ':'])
        .next()
        .map(|s| s.trim_end_matches(".git"))
        .filter(|s| !s.is_empty())
        .unwrap_or("repository")
        .to_string()
}

fn validate_name(name: &str) -> TpromptsResult<()> {
    let reason = if name.is_empty() {
        Some("repository name is empty")
    } else if name.contains(['/', '\\']) {
        Some("repository name must not contain path separators")
    } else if name.starts_with('.') {
        Some("repository name must not start with '.'")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(TpromptsError::InvalidIdentifier {
            identifier: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{registry, write_local_repository};
    use crate::infrastructure::sources::fake_vcs::FakeVcs;
    use std::fs;
    use tempfile::tempdir;

    const URL: &str = "https://github.com/acme/team-prompts.git";

    #[test]
    fn derive_name_from_sources() {
        assert_eq!(derive_name(URL), "team-prompts");
        assert_eq!(derive_name("git@github.com:acme/rules.git"), "rules");
        assert_eq!(derive_name("/home/me/my-prompts/"), "my-prompts");
        assert_eq!(derive_name("./prompts"), "prompts");
    }

    #[test]
    fn register_local_repository() {
        let home = tempdir().unwrap();
        let repo = tempdir().unwrap();
        write_local_repository(repo.path());
        fs::write(
            repo.path().join(".tprompts-repo.json"),
            r#"{"description":"Mine"}"#,
        )
        .unwrap();
        let registry = registry();
        let vcs = FakeVcs::with_prompt();
        let use_case = RegisterUseCase::new(&registry, &vcs, home.path(), "/");

        let result = use_case
            .register(&RegisterOptions {
                source: repo.path().display().to_string(),
                name: Some("mine".to_string()),
                make_default: true,
                version: None,
            })
            .unwrap();

        assert!(result.made_default);
        assert_eq!(result.record.kind, RepositoryKind::Local);
        assert_eq!(result.record.origin, repo.path().display().to_string());
        assert_eq!(
            result.record.metadata.unwrap().description.as_deref(),
            Some("Mine")
        );
        assert_eq!(registry.get_default().unwrap().unwrap().name, "mine");
        assert!(vcs.calls().is_empty());
    }

    #[test]
    fn register_relative_local_path() {
        let home = tempdir().unwrap();
        let cwd = tempdir().unwrap();
        write_local_repository(&cwd.path().join("prompts"));
        let registry = registry();
        let vcs = FakeVcs::with_prompt();

        let result = RegisterUseCase::new(&registry, &vcs, home.path(), cwd.path())
            .register(&RegisterOptions {
                source: "./prompts".to_string(),
                ..RegisterOptions::default()
            })
            .unwrap();

        assert_eq!(result.record.name, "prompts");
        assert_eq!(result.record.working_path(), Some(cwd.path().join("prompts").as_path()));
    }

    #[test]
    fn register_versioned_repository_clones() {
        let home = tempdir().unwrap();
        let registry = registry();
        let vcs = FakeVcs::with_prompt();
        let use_case = RegisterUseCase::new(&registry, &vcs, home.path(), "/");

        let result = use_case
            .register(&RegisterOptions {
                source: URL.to_string(),
                version: Some("v1.0.0".to_string()),
                ..RegisterOptions::default()
            })
            .unwrap();

        let record = result.record;
        assert_eq!(record.name, "team-prompts");
        assert_eq!(record.local_path, Some(home.path().join("team-prompts")));
        assert_eq!(record.requested_version.as_deref(), Some("v1.0.0"));
        assert_eq!(record.current_version.as_deref(), Some("abc1234"));
    }

    #[test]
    fn duplicate_name_fails_before_cloning() {
        let home = tempdir().unwrap();
        let registry = registry();
        registry
            .register(RepositoryRecord::local("team-prompts", "/x".into()))
            .unwrap();
        let vcs = FakeVcs::with_prompt();

        let err = RegisterUseCase::new(&registry, &vcs, home.path(), "/")
            .register(&RegisterOptions {
                source: URL.to_string(),
                ..RegisterOptions::default()
            })
            .unwrap_err();

        assert!(matches!(err, TpromptsError::DuplicateRepository { .. }));
        assert!(vcs.calls().is_empty());
    }

    #[test]
    fn failed_validation_registers_nothing() {
        let home = tempdir().unwrap();
        let registry = registry();
        let vcs = FakeVcs::empty();

        let err = RegisterUseCase::new(&registry, &vcs, home.path(), "/")
            .register(&RegisterOptions {
                source: URL.to_string(),
                ..RegisterOptions::default()
            })
            .unwrap_err();

        assert!(matches!(err, TpromptsError::NoPromptsFound { .. }));
        assert!(registry.list().unwrap().is_empty());
        assert!(!home.path().join("team-prompts").exists());
    }

    #[test]
    fn invalid_names_are_rejected() {
        let home = tempdir().unwrap();
        let registry = registry();
        let vcs = FakeVcs::with_prompt();
        let err = RegisterUseCase::new(&registry, &vcs, home.path(), "/")
            .register(&RegisterOptions {
                source: URL.to_string(),
                name: Some("a/b".to_string()),
                ..RegisterOptions::default()
            })
            .unwrap_err();
        assert!(matches!(err, TpromptsError::InvalidIdentifier { .. }));
    }

    #[test]
    fn unregister_removes_managed_checkout() {
        let home = tempdir().unwrap();
        let registry = registry();
        let vcs = FakeVcs::with_prompt();
        let use_case = RegisterUseCase::new(&registry, &vcs, home.path(), "/");
        use_case
            .register(&RegisterOptions {
                source: URL.to_string(),
                make_default: true,
                ..RegisterOptions::default()
            })
            .unwrap();

        let result = use_case.unregister("team-prompts", false).unwrap();
        assert!(result.was_default);
        assert_eq!(result.removed_files, Some(home.path().join("team-prompts")));
        assert!(!home.path().join("team-prompts").exists());
        assert!(registry.get_default().unwrap().is_none());
    }

    #[test]
    fn unregister_keep_files_and_local_repositories_keep_directories() {
        let home = tempdir().unwrap();
        let repo = tempdir().unwrap();
        write_local_repository(repo.path());
        let registry = registry();
        let vcs = FakeVcs::with_prompt();
        let use_case = RegisterUseCase::new(&registry, &vcs, home.path(), "/");
        use_case
            .register(&RegisterOptions {
                source: URL.to_string(),
                ..RegisterOptions::default()
            })
            .unwrap();
        use_case
            .register(&RegisterOptions {
                source: repo.path().display().to_string(),
                name: Some("mine".to_string()),
                ..RegisterOptions::default()
            })
            .unwrap();

        let kept = use_case.unregister("team-prompts", true).unwrap();
        assert!(kept.removed_files.is_none());
        assert!(home.path().join("team-prompts").exists());

        let local = use_case.unregister("mine", false).unwrap();
        assert!(local.removed_files.is_none());
        assert!(repo.path().join("react").exists());
        assert!(registry.list().unwrap().is_empty());
    }
}
