//! Editor value object - which assistant/editor a prompt is installed for

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TpromptsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Editor {
    /// VS Code with GitHub Copilot
    #[serde(rename = "vscode")]
    #[value(name = "vscode")]
    VSCode,
    /// Cursor IDE
    Cursor,
    /// Windsurf IDE
    Windsurf,
    /// Claude Code (Anthropic)
    ClaudeCode,
}

impl Editor {
    pub const ALL: [Editor; 4] = [
        Editor::VSCode,
        Editor::Cursor,
        Editor::Windsurf,
        Editor::ClaudeCode,
    ];

    /// Key used in manifests and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Editor::VSCode => "vscode",
            Editor::Cursor => "cursor",
            Editor::Windsurf => "windsurf",
            Editor::ClaudeCode => "claude-code",
        }
    }

    /// Conventional directory the editor reads project rules from
    pub fn base_dir(&self) -> &'static str {
        match self {
            Editor::VSCode => ".vscode/",
            Editor::Cursor => ".cursor/",
            Editor::Windsurf => ".windsurf/",
            Editor::ClaudeCode => "./",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Editor::VSCode => "VS Code",
            Editor::Cursor => "Cursor",
            Editor::Windsurf => "Windsurf",
            Editor::ClaudeCode => "Claude Code",
        }
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|e| e.as_str().to_string()).collect()
    }
}

impl FromStr for Editor {
    type Err = TpromptsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vscode" | "vs-code" => Ok(Editor::VSCode),
            "cursor" => Ok(Editor::Cursor),
            "windsurf" => Ok(Editor::Windsurf),
            "claude-code" | "claudecode" => Ok(Editor::ClaudeCode),
            _ => Err(TpromptsError::UnsupportedEditor {
                editor: s.to_string(),
                supported: Editor::names(),
            }),
        }
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
