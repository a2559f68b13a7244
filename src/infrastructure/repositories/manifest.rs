//! Manifest loader
//!
//! Reads `tprompts.json` from a prompt directory. The document is walked as a
//! `serde_json::Value` (with `preserve_order`) so editor and file entries keep
//! the order they were written in.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::entities::{EditorMapping, FileRule, PromptManifest, RuleKind, MANIFEST_FILE};
use crate::error::{TpromptsError, TpromptsResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestLoader;

impl JsonManifestLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load the manifest of `prompt_dir`; `None` when the file is absent
    pub fn load(&self, prompt_dir: &Path) -> TpromptsResult<Option<PromptManifest>> {
        let path = prompt_dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        self.parse(&path, &content).map(Some)
    }

    /// Parse manifest text; `path` is only used in error messages
    pub fn parse(&self, path: &Path, content: &str) -> TpromptsResult<PromptManifest> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| malformed(path, e.to_string()))?;
        parse_manifest(path, &value)
    }

    /// Immediate non-hidden subdirectories of `repository` holding a manifest,
    /// sorted by name
    pub fn discover(&self, repository: &Path) -> TpromptsResult<Vec<String>> {
        if !repository.is_dir() {
            return Ok(Vec::new());
        }

        let mut prompts = Vec::new();
        for entry in fs::read_dir(repository)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            if path.is_dir() && path.join(MANIFEST_FILE).is_file() {
                prompts.push(name);
            }
        }
        prompts.sort();
        Ok(prompts)
    }
}

fn parse_manifest(path: &Path, value: &Value) -> TpromptsResult<PromptManifest> {
    let root = value
        .as_object()
        .ok_or_else(|| malformed(path, "expected a JSON object"))?;

    let name = match root.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        _ => return Err(malformed(path, "missing required field 'name'")),
    };

    let editors = root
        .get("editors")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed(path, "missing required field 'editors'"))?;

    let mut manifest = PromptManifest::new(name);
    manifest.description = optional_string(path, root, "description")?;
    manifest.version = optional_string(path, root, "version")?;

    for (editor, files) in editors {
        let files = files
            .as_object()
            .ok_or_else(|| malformed(path, format!("editor '{}' must map files to rules", editor)))?;

        let mut mapping = EditorMapping::new();
        for (relative_path, rule) in files {
            mapping.insert(relative_path.clone(), parse_rule(path, editor, relative_path, rule)?);
        }
        manifest = manifest.with_editor(editor.clone(), mapping);
    }

    Ok(manifest)
}

fn parse_rule(path: &Path, editor: &str, relative_path: &str, value: &Value) -> TpromptsResult<FileRule> {
    let context = |message: &str| malformed(path, format!("{}: '{}': {}", editor, relative_path, message));

    let rule = value.as_object().ok_or_else(|| context("rule must be an object"))?;

    let location = match rule.get("location") {
        Some(Value::String(location)) if !location.is_empty() => location.clone(),
        _ => return Err(context("missing or empty 'location'")),
    };

    let mut file_rule = FileRule::new(location);
    file_rule.prefix = nullable_string(rule, "prefix").map_err(|m| context(&m))?;
    file_rule.suffix = nullable_string(rule, "suffix").map_err(|m| context(&m))?;
    file_rule.kind = match nullable_string(rule, "kind").map_err(|m| context(&m))? {
        Some(kind) => Some(
            RuleKind::parse(&kind)
                .ok_or_else(|| context(&format!("unknown kind '{}' (expected file or directory)", kind)))?,
        ),
        None => None,
    };

    Ok(file_rule)
}

fn optional_string(path: &Path, object: &Map<String, Value>, key: &str) -> TpromptsResult<Option<String>> {
    nullable_string(object, key).map_err(|m| malformed(path, m))
}

/// Absent and `null` both mean "not set"
fn nullable_string(object: &Map<String, Value>, key: &str) -> Result<Option<String>, String> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(format!("'{}' must be a string", key)),
    }
}

fn malformed(path: &Path, message: impl Into<String>) -> TpromptsError {
    TpromptsError::MalformedManifest {
        path: PathBuf::from(path),
        message: message.into(),
    }
}
