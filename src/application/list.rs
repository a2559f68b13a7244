//! List Use Case
//!
//! Describes the prompts each registered repository offers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::application::resolver::source_for;
use crate::application::RegistryUseCase;
use crate::domain::entities::{RepositoryRecord, MANIFEST_FILE};
use crate::domain::ports::VersionControl;
use crate::error::TpromptsResult;
use crate::infrastructure::repositories::JsonManifestLoader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSummary {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub editors: Vec<String>,
    /// Top-level entries of the prompt directory; directories end in `/`
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptListing {
    Prompts(Vec<PromptSummary>),
    /// Repository could not be read
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPrompts {
    pub repository: RepositoryRecord,
    pub is_default: bool,
    pub listing: PromptListing,
}

pub struct ListUseCase<'a> {
    registry: &'a RegistryUseCase,
    vcs: &'a dyn VersionControl,
    repositories_dir: PathBuf,
    loader: JsonManifestLoader,
}

impl<'a> ListUseCase<'a> {
    pub fn new(
        registry: &'a RegistryUseCase,
        vcs: &'a dyn VersionControl,
        repositories_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            vcs,
            repositories_dir: repositories_dir.into(),
            loader: JsonManifestLoader::new(),
        }
    }

    /// Prompts of `name`, or of every repository in registry order
    pub fn execute(&self, name: Option<&str>) -> TpromptsResult<Vec<RepositoryPrompts>> {
        let default = self.registry.get_default()?.map(|r| r.name);
        let records = match name {
            Some(name) => vec![self.registry.require(name)?],
            None => self.registry.list()?,
        };

        Ok(records
            .into_iter()
            .map(|repository| {
                let listing = match self.prompts_of(&repository) {
                    Ok(prompts) => PromptListing::Prompts(prompts),
                    Err(e) => {
                        log::warn!("Cannot list '{}': {}", repository.name, e);
                        PromptListing::Unavailable(e.to_string())
                    }
                };
                RepositoryPrompts {
                    is_default: default.as_deref() == Some(repository.name.as_str()),
                    repository,
                    listing,
                }
            })
            .collect())
    }

    fn prompts_of(&self, record: &RepositoryRecord) -> TpromptsResult<Vec<PromptSummary>> {
        let root = source_for(record, self.vcs, &self.repositories_dir).working_path(record)?;

        let mut prompts = Vec::new();
        for name in self.loader.discover(&root)? {
            let dir = root.join(&name);
            let Some(manifest) = self.loader.load(&dir)? else {
                continue;
            };
            prompts.push(PromptSummary {
                name,
                description: manifest.description.clone(),
                version: manifest.version.clone(),
                editors: manifest.editor_names(),
                files: top_level_files(&dir)?,
            });
        }
        Ok(prompts)
    }
}

fn top_level_files(dir: &Path) -> TpromptsResult<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || name == MANIFEST_FILE {
            continue;
        }
        if entry.path().is_dir() {
            files.push(format!("{}/", name));
        } else {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}
