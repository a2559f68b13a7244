//! Repository entity
//!
//! A registered source of prompts: either a versioned (git) checkout managed
//! by tprompts, or a local directory used in place.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a repository's files reach the local disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryKind {
    /// Remote, version-controlled; cloned into the managed directory
    Versioned,
    /// Local directory, used in place
    Local,
}

impl RepositoryKind {
    /// Name used in the persisted registry
    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryKind::Versioned => "git",
            RepositoryKind::Local => "local",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "git" | "versioned" => Some(RepositoryKind::Versioned),
            "local" => Some(RepositoryKind::Local),
            _ => None,
        }
    }

    /// Guess the kind of a user-supplied source string
    pub fn detect(source: &str) -> Self {
        if source.starts_with("http")
            || source.starts_with("git@")
            || source.contains("github.com")
            || source.contains("gitlab.com")
            || source.ends_with(".git")
        {
            RepositoryKind::Versioned
        } else {
            RepositoryKind::Local
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional descriptive data, read from `.tprompts-repo.json` at the
/// repository root and stored alongside the record for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Set on one-shot records produced for URL installs
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub temporary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub name: String,
    /// Clone URL for versioned repositories, directory for local ones
    pub origin: String,
    pub kind: RepositoryKind,
    pub local_path: Option<PathBuf>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub current_version: Option<String>,
    pub requested_version: Option<String>,
    pub metadata: Option<RepositoryMetadata>,
}

impl RepositoryRecord {
    pub fn versioned(
        name: impl Into<String>,
        origin: impl Into<String>,
        local_path: PathBuf,
        version: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            kind: RepositoryKind::Versioned,
            local_path: Some(local_path),
            last_updated_at: Some(Utc::now()),
            current_version: version.clone(),
            requested_version: version,
            metadata: None,
        }
    }

    pub fn local(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            origin: path.display().to_string(),
            kind: RepositoryKind::Local,
            local_path: Some(path),
            last_updated_at: Some(Utc::now()),
            current_version: None,
            requested_version: None,
            metadata: None,
        }
    }

    pub fn is_versioned(&self) -> bool {
        self.kind == RepositoryKind::Versioned
    }

    /// Directory prompts are read from.
    ///
    /// Local records written before `local_path` existed fall back to `origin`.
    pub fn working_path(&self) -> Option<&Path> {
        match (&self.local_path, self.kind) {
            (Some(path), _) => Some(path.as_path()),
            (None, RepositoryKind::Local) => Some(Path::new(&self.origin)),
            (None, RepositoryKind::Versioned) => None,
        }
    }

    pub fn is_temporary(&self) -> bool {
        self.metadata.as_ref().is_some_and(|m| m.temporary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_git_sources() {
        assert_eq!(
            RepositoryKind::detect("https://github.com/acme/prompts"),
            RepositoryKind::Versioned
        );
        assert_eq!(
            RepositoryKind::detect("git@github.com:acme/prompts.git"),
            RepositoryKind::Versioned
        );
        assert_eq!(
            RepositoryKind::detect("/srv/mirror/prompts.git"),
            RepositoryKind::Versioned
        );
    }

    #[test]
    fn detect_local_sources() {
        assert_eq!(
            RepositoryKind::detect("/home/me/prompts"),
            RepositoryKind::Local
        );
        assert_eq!(RepositoryKind::detect("./prompts"), RepositoryKind::Local);
    }

    #[test]
    fn kind_round_trips_through_persisted_name() {
        for kind in [RepositoryKind::Versioned, RepositoryKind::Local] {
            assert_eq!(RepositoryKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(RepositoryKind::parse("svn"), None);
    }

    #[test]
    fn local_record_origin_matches_path() {
        let record = RepositoryRecord::local("mine", PathBuf::from("/p/prompts"));
        assert_eq!(record.origin, "/p/prompts");
        assert_eq!(record.working_path(), Some(Path::new("/p/prompts")));
    }

    #[test]
    fn legacy_local_record_falls_back_to_origin() {
        let mut record = RepositoryRecord::local("mine", PathBuf::from("/p/prompts"));
        record.local_path = None;
        assert_eq!(record.working_path(), Some(Path::new("/p/prompts")));
    }

    #[test]
    fn versioned_record_without_path_has_no_working_path() {
        let mut record = RepositoryRecord::versioned(
            "team",
            "https://example.com/team.git",
            PathBuf::from("/r/team"),
            Some("v1".to_string()),
        );
        assert_eq!(record.requested_version.as_deref(), Some("v1"));
        record.local_path = None;
        assert!(record.working_path().is_none());
    }

    #[test]
    fn metadata_parses_camel_case() {
        let json = r#"{"description":"Team prompts","categories":["rules"],"originalUrl":"https://x"}"#;
        let meta: RepositoryMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.description.as_deref(), Some("Team prompts"));
        assert_eq!(meta.categories, vec!["rules".to_string()]);
        assert_eq!(meta.original_url.as_deref(), Some("https://x"));
        assert!(!meta.temporary);
    }

    #[test]
    fn records_have_full_equality() {
        fn is_eq<T: Eq>(_: &T) {}

        let a = RepositoryRecord::local("mine", PathBuf::from("/p"));
        let mut b = a.clone();
        is_eq(&a);
        assert_eq!(a, b);
        b.metadata = Some(RepositoryMetadata::default());
        assert_ne!(a, b);
    }
}
