//! Tests for the config module

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::tempdir;

use super::*;
use crate::error::TpromptsError;

#[test]
fn test_config_default() {
    let config = UserConfig::default();

    assert!(config.default_editor.is_none());
    assert_eq!(config.timeouts.clone_secs, 120);
    assert!(config.protected_dirs.contains(&"node_modules".to_string()));
    assert_eq!(
        config.repositories_dir(Path::new("/h/.tprompts")),
        PathBuf::from("/h/.tprompts/repositories")
    );
}

#[test]
fn test_missing_config_file_is_default() {
    let dir = tempdir().unwrap();
    let (config, warnings) = UserConfig::load(dir.path()).unwrap();
    assert_eq!(config, UserConfig::default());
    assert!(warnings.is_empty());
}

#[test]
fn test_config_parse_toml() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"
default_editor = "cursor"
repositories_path = "/srv/prompts"
protected_dirs = [".git", "docs"]

[timeouts]
clone_secs = 300
"#,
    )
    .unwrap();

    let (config, warnings) = UserConfig::load(dir.path()).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.default_editor.as_deref(), Some("cursor"));
    assert_eq!(config.protected_dirs, vec![".git", "docs"]);
    assert_eq!(config.timeouts.clone_secs, 300);
    assert_eq!(config.timeouts.fetch_secs, 60);
    assert_eq!(
        config.repositories_dir(dir.path()),
        PathBuf::from("/srv/prompts")
    );
}

#[test]
fn test_unknown_key_warns_with_suggestion() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "default_editr = \"cursor\"\n").unwrap();

    let (_, warnings) = UserConfig::load(dir.path()).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "default_editr");
    assert_eq!(warnings[0].line, Some(1));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("default_editor"));
    assert!(warnings[0].to_string().contains("did you mean 'default_editor'"));
}

#[test]
fn test_malformed_config_is_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "timeouts = \"soon\"\n").unwrap();

    let err = UserConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, TpromptsError::ConfigInvalid { .. }));
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides(UserConfig::default(), |key| match key {
        "TPROMPTS_DEFAULT_EDITOR" => Some("windsurf".to_string()),
        "TPROMPTS_REPOSITORIES_PATH" => Some("/tmp/repos".to_string()),
        _ => None,
    });
    assert_eq!(config.default_editor.as_deref(), Some("windsurf"));
    assert_eq!(config.repositories_path, Some(PathBuf::from("/tmp/repos")));
}

#[test]
fn test_blank_env_override_is_ignored() {
    let base = UserConfig {
        default_editor: Some("cursor".to_string()),
        ..UserConfig::default()
    };
    let config = with_env_overrides(base, |_| Some("  ".to_string()));
    assert_eq!(config.default_editor.as_deref(), Some("cursor"));
}

#[test]
fn test_zero_timeout_is_clamped() {
    let timeouts = TimeoutConfig {
        probe_secs: 0,
        ..TimeoutConfig::default()
    };
    assert_eq!(timeouts.git_timeouts().probe, Duration::from_secs(1));
    assert_eq!(timeouts.git_timeouts().clone, Duration::from_secs(120));
}
