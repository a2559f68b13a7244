//! Prompt manifest entity
//!
//! Parsed form of a prompt's `tprompts.json`. Editor and file entries keep
//! the order they had in the manifest; that order drives display order.

use std::fmt;

/// File name of the per-prompt manifest
pub const MANIFEST_FILE: &str = "tprompts.json";

/// Explicit shape of a rule's source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    File,
    Directory,
}

impl RuleKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "file" => Some(RuleKind::File),
            "directory" | "dir" => Some(RuleKind::Directory),
            _ => None,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::File => f.write_str("file"),
            RuleKind::Directory => f.write_str("directory"),
        }
    }
}

/// Where one file or directory of a prompt lands, and how it is wrapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRule {
    /// Destination, relative to the install root (or `~/`-relative)
    pub location: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// When set, the source must have this shape
    pub kind: Option<RuleKind>,
}

impl FileRule {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            prefix: None,
            suffix: None,
            kind: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_kind(mut self, kind: RuleKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// `prefix + raw + suffix`, byte for byte
    pub fn wrap(&self, raw: &[u8]) -> Vec<u8> {
        let prefix = self.prefix.as_deref().unwrap_or("").as_bytes();
        let suffix = self.suffix.as_deref().unwrap_or("").as_bytes();
        let mut content = Vec::with_capacity(prefix.len() + raw.len() + suffix.len());
        content.extend_from_slice(prefix);
        content.extend_from_slice(raw);
        content.extend_from_slice(suffix);
        content
    }
}

/// Mapping of prompt-relative paths to rules for one editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorMapping {
    entries: Vec<(String, FileRule)>,
}

impl EditorMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, relative_path: impl Into<String>, rule: FileRule) {
        let relative_path = relative_path.into();
        if let Some(existing) = self.entries.iter_mut().find(|(p, _)| *p == relative_path) {
            existing.1 = rule;
        } else {
            self.entries.push((relative_path, rule));
        }
    }

    pub fn with(mut self, relative_path: impl Into<String>, rule: FileRule) -> Self {
        self.insert(relative_path, rule);
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &FileRule)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptManifest {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    editors: Vec<(String, EditorMapping)>,
}

impl PromptManifest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            version: None,
            editors: Vec::new(),
        }
    }

    pub fn with_editor(mut self, editor: impl Into<String>, mapping: EditorMapping) -> Self {
        let editor = editor.into();
        self.editors.retain(|(name, _)| *name != editor);
        self.editors.push((editor, mapping));
        self
    }

    pub fn editor(&self, editor: &str) -> Option<&EditorMapping> {
        self.editors
            .iter()
            .find(|(name, _)| name == editor)
            .map(|(_, mapping)| mapping)
    }

    /// Editor names in manifest order
    pub fn editor_names(&self) -> Vec<String> {
        self.editors.iter().map(|(name, _)| name.clone()).collect()
    }
}
