//! Prompt repository fixtures

use std::fs;
use std::path::Path;

pub const REACT_MANIFEST: &str = r#"{
    "name": "react",
    "description": "React rules",
    "version": "1.0.0",
    "editors": {
        "cursor": {
            "rules": { "location": ".cursor/rules/" },
            "AGENTS.md": { "location": "AGENTS.md", "prefix": "<!-- react -->\n", "suffix": "\n<!-- /react -->" }
        },
        "windsurf": {
            "rules": { "location": ".windsurf/rules/" }
        }
    }
}"#;

/// `react` prompt with a rules directory and one wrapped file
pub fn write_react_prompt(repo: &Path) {
    let prompt = repo.join("react");
    fs::create_dir_all(prompt.join("rules/hooks")).unwrap();
    fs::write(prompt.join("tprompts.json"), REACT_MANIFEST).unwrap();
    fs::write(prompt.join("rules/components.md"), "Prefer function components.").unwrap();
    fs::write(prompt.join("rules/hooks/effects.md"), "Keep effects small.").unwrap();
    fs::write(prompt.join("AGENTS.md"), "Use TypeScript.").unwrap();
}
