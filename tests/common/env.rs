//! Test environment for isolated tprompts runs.
//!
//! Every run gets its own `TPROMPTS_HOME`, so the registry and config of
//! the developer running the tests are never touched.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::write_react_prompt;

/// Result of running a tprompts CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a single JSON object
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

pub struct TestEnv {
    /// Directory prompts are installed into (the working directory)
    pub project_root: TempDir,
    /// `TPROMPTS_HOME`
    pub home_dir: TempDir,
    /// Local prompt repository
    pub repo_dir: TempDir,
}

impl TestEnv {
    /// Empty environment; the repository directory holds nothing
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
            repo_dir: TempDir::new().unwrap(),
        }
    }

    /// Environment whose repository holds the `react` fixture prompt
    pub fn with_react_repository() -> Self {
        let env = Self::new();
        write_react_prompt(env.repo_dir.path());
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn repo_path(&self) -> &Path {
        self.repo_dir.path()
    }

    /// Register the repository directory as `mine`, as the default
    pub fn register_default(&self) {
        let result = self.run(&["register", &self.repo_path().display().to_string(), "--name", "mine", "--default"]);
        assert!(result.success, "register failed:\n{}", result.combined_output());
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tprompts"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("TPROMPTS_HOME", self.home_dir.path())
            .env("HOME", self.home_dir.path())
            .env("NO_COLOR", "1")
            .env("CI", "1")
            .env("LC_ALL", "C")
            .env_remove("TPROMPTS_DEFAULT_EDITOR")
            .env_remove("TPROMPTS_REPOSITORIES_PATH")
            .env_remove("RUST_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute tprompts");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn write_home_file(&self, relative: &str, content: &str) {
        let path = self.home_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}
