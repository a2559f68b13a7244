//! Prompt resolution
//!
//! Turns a [`ParsedIdentifier`] into a prompt directory with its manifest,
//! from a registered repository, the default repository, or an ephemeral
//! clone of a URL.

use std::path::{Path, PathBuf};

use crate::application::RegistryUseCase;
use crate::domain::entities::{EditorMapping, PromptManifest, RepositoryKind, RepositoryRecord};
use crate::domain::ports::{RepositorySource, VersionControl};
use crate::domain::value_objects::{Editor, ParsedIdentifier};
use crate::error::{TpromptsError, TpromptsResult};
use crate::infrastructure::repositories::JsonManifestLoader;
use crate::infrastructure::sources::{CleanupGuard, EphemeralSource, LocalSource, VersionedSource};

/// Source manager for a record's kind
pub fn source_for<'a>(
    record: &RepositoryRecord,
    vcs: &'a dyn VersionControl,
    repositories_dir: &Path,
) -> Box<dyn RepositorySource + 'a> {
    match record.kind {
        RepositoryKind::Versioned => Box::new(VersionedSource::new(vcs, repositories_dir)),
        RepositoryKind::Local => Box::new(LocalSource::new()),
    }
}

#[derive(Debug)]
pub struct ResolvedPrompt {
    pub identifier: ParsedIdentifier,
    pub repository: RepositoryRecord,
    pub prompt_dir: PathBuf,
    pub manifest: PromptManifest,
    guard: Option<CleanupGuard>,
}

impl ResolvedPrompt {
    /// File mapping for `editor`; `UnsupportedEditor` lists what the prompt offers
    pub fn mapping(&self, editor: Editor) -> TpromptsResult<&EditorMapping> {
        self.manifest
            .editor(editor.as_str())
            .ok_or_else(|| TpromptsError::UnsupportedEditor {
                editor: editor.as_str().to_string(),
                supported: self.manifest.editor_names(),
            })
    }

    pub fn is_ephemeral(&self) -> bool {
        self.guard.is_some()
    }

    /// Release the ephemeral checkout, if any
    pub fn finish(mut self) {
        if let Some(guard) = self.guard.take() {
            guard.cleanup();
        }
    }
}

pub struct PromptResolver<'a> {
    registry: &'a RegistryUseCase,
    vcs: &'a dyn VersionControl,
    repositories_dir: PathBuf,
    temp_root: Option<PathBuf>,
}

impl<'a> PromptResolver<'a> {
    pub fn new(
        registry: &'a RegistryUseCase,
        vcs: &'a dyn VersionControl,
        repositories_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            vcs,
            repositories_dir: repositories_dir.into(),
            temp_root: None,
        }
    }

    /// Ephemeral clones go under `root` instead of the system temp dir
    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(root.into());
        self
    }

    /// Resolve any identifier shape.
    ///
    /// `version` only applies to URL identifiers and wins over a ref embedded
    /// in the URL.
    pub fn resolve(&self, identifier: &ParsedIdentifier, version: Option<&str>) -> TpromptsResult<ResolvedPrompt> {
        if identifier.is_url {
            return self.resolve_url(identifier, version);
        }
        self.resolve_registered(identifier)
    }

    /// Resolve through the registry only; URL identifiers are rejected
    pub fn resolve_registered(&self, identifier: &ParsedIdentifier) -> TpromptsResult<ResolvedPrompt> {
        if identifier.is_url {
            return Err(TpromptsError::InvalidIdentifier {
                identifier: identifier.original_url.clone().unwrap_or_default(),
                reason: "prompts installed from a URL cannot be resolved from the registry; register the repository first".to_string(),
            });
        }

        let repository = self.repository_for(identifier)?;
        let source = source_for(&repository, self.vcs, &self.repositories_dir);
        let root = source.working_path(&repository)?;
        let prompt_dir = root.join(&identifier.prompt_path);

        let manifest = self.load_manifest(&prompt_dir, identifier, &repository.name)?;
        Ok(ResolvedPrompt {
            identifier: identifier.clone(),
            repository,
            prompt_dir,
            manifest,
            guard: None,
        })
    }

    /// Named repository, or the default for bare prompt names
    pub fn repository_for(&self, identifier: &ParsedIdentifier) -> TpromptsResult<RepositoryRecord> {
        match &identifier.repository_name {
            Some(name) => self.registry.require(name),
            None => self
                .registry
                .get_default()?
                .ok_or(TpromptsError::NoDefaultRepository),
        }
    }

    fn resolve_url(&self, identifier: &ParsedIdentifier, version: Option<&str>) -> TpromptsResult<ResolvedPrompt> {
        let url = identifier
            .original_url
            .as_deref()
            .ok_or_else(|| TpromptsError::InvalidIdentifier {
                identifier: identifier.display_name(),
                reason: "missing URL".to_string(),
            })?;
        let version = version.or(identifier.reference.as_deref());

        let mut source = EphemeralSource::new(self.vcs);
        if let Some(root) = &self.temp_root {
            source = source.with_temp_root(root);
        }
        let checkout = source.fetch(url, &identifier.prompt_path, version)?;

        // On error the checkout is dropped here, which removes the temp dir
        let manifest =
            self.load_manifest(&checkout.prompt_dir, identifier, &checkout.record.name)?;
        Ok(ResolvedPrompt {
            identifier: identifier.clone(),
            repository: checkout.record,
            prompt_dir: checkout.prompt_dir,
            manifest,
            guard: Some(checkout.guard),
        })
    }

    fn load_manifest(
        &self,
        prompt_dir: &Path,
        identifier: &ParsedIdentifier,
        repository: &str,
    ) -> TpromptsResult<PromptManifest> {
        let not_found = || TpromptsError::PromptNotFound {
            prompt: identifier.prompt_path.clone(),
            repository: repository.to_string(),
        };
        if !prompt_dir.is_dir() {
            return Err(not_found());
        }
        JsonManifestLoader::new()
            .load(prompt_dir)?
            .ok_or_else(not_found)
    }
}
