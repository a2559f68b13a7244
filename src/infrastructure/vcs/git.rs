//! Git executable adapter for the VersionControl port

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use super::command::{self, CommandOutput};
use crate::domain::ports::{Head, VersionControl};
use crate::error::{TpromptsError, TpromptsResult};

/// Time budget per kind of git operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitTimeouts {
    /// Reachability check (`ls-remote`) and local queries
    pub probe: Duration,
    pub clone: Duration,
    /// `fetch` and `pull`
    pub fetch: Duration,
    pub checkout: Duration,
}

impl Default for GitTimeouts {
    fn default() -> Self {
        Self {
            probe: Duration::from_secs(30),
            clone: Duration::from_secs(120),
            fetch: Duration::from_secs(60),
            checkout: Duration::from_secs(30),
        }
    }
}

/// Runs the `git` binary found on `PATH`
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    timeouts: GitTimeouts,
}

impl GitCli {
    pub fn new(timeouts: GitTimeouts) -> Self {
        Self { timeouts }
    }

    pub fn timeouts(&self) -> GitTimeouts {
        self.timeouts
    }

    /// Whether a usable git is installed
    pub fn is_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn git(&self, cwd: Option<&Path>, args: &[&str], timeout: Duration) -> TpromptsResult<CommandOutput> {
        let mut cmd = Command::new("git");
        cmd.args(args)
            // Never block on a credential prompt
            .env("GIT_TERMINAL_PROMPT", "0");
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let label = format!("git {}", args.first().copied().unwrap_or_default());
        command::run(&mut cmd, &label, timeout)
    }

    /// Run and require success
    fn git_ok(&self, cwd: Option<&Path>, args: &[&str], timeout: Duration) -> TpromptsResult<String> {
        let out = self.git(cwd, args, timeout)?;
        if !out.success {
            return Err(TpromptsError::SubprocessFailed {
                command: format!("git {}", args.join(" ")),
                message: out.message(),
            });
        }
        Ok(out.stdout)
    }
}

impl VersionControl for GitCli {
    fn probe(&self, url: &str) -> TpromptsResult<()> {
        log::info!("Validating Git repository: {}", url);
        let out = self.git(None, &["ls-remote", "--", url], self.timeouts.probe)?;
        if !out.success {
            return Err(TpromptsError::RemoteUnreachable {
                url: url.to_string(),
                message: out.message(),
            });
        }
        Ok(())
    }

    fn clone_repo(&self, url: &str, dest: &Path) -> TpromptsResult<()> {
        log::info!("Cloning {} into {}", url, dest.display());
        let dest_arg = dest.to_string_lossy();
        let out = self.git(None, &["clone", "--", url, &dest_arg], self.timeouts.clone)?;
        if out.success {
            return Ok(());
        }
        let message = out.message();
        if looks_unreachable(&out.stderr) {
            Err(TpromptsError::RemoteUnreachable {
                url: url.to_string(),
                message,
            })
        } else {
            Err(TpromptsError::SubprocessFailed {
                command: "git clone".to_string(),
                message,
            })
        }
    }

    fn fetch(&self, repo: &Path) -> TpromptsResult<()> {
        log::info!("Fetching {}", repo.display());
        self.git_ok(Some(repo), &["fetch", "--all", "--tags"], self.timeouts.fetch)
            .map(drop)
    }

    fn pull(&self, repo: &Path) -> TpromptsResult<()> {
        log::info!("Pulling {}", repo.display());
        self.git_ok(Some(repo), &["pull", "origin"], self.timeouts.fetch)
            .map(drop)
    }

    fn checkout(&self, repo: &Path, reference: &str) -> TpromptsResult<()> {
        // A leading dash would be read as an option
        if reference.is_empty() || reference.starts_with('-') {
            return Err(TpromptsError::VersionNotFound {
                version: reference.to_string(),
            });
        }
        log::info!("Checking out {} in {}", reference, repo.display());
        // Trailing `--` keeps git from falling back to restoring a path
        let out = self.git(Some(repo), &["checkout", reference, "--"], self.timeouts.checkout)?;
        if out.success {
            return Ok(());
        }
        if looks_unresolved(&out.stderr) {
            Err(TpromptsError::VersionNotFound {
                version: reference.to_string(),
            })
        } else {
            Err(TpromptsError::SubprocessFailed {
                command: "git checkout".to_string(),
                message: out.message(),
            })
        }
    }

    fn head(&self, repo: &Path) -> TpromptsResult<Head> {
        let branch = self.git_ok(Some(repo), &["branch", "--show-current"], self.timeouts.probe)?;
        let branch = branch.trim();
        if !branch.is_empty() {
            return Ok(Head::Branch(branch.to_string()));
        }
        let commit = self.git_ok(Some(repo), &["rev-parse", "HEAD"], self.timeouts.probe)?;
        Ok(Head::Detached(commit.trim().chars().take(7).collect()))
    }

    fn remote_branches(&self, repo: &Path) -> TpromptsResult<Vec<String>> {
        let out = self.git_ok(Some(repo), &["branch", "-r"], self.timeouts.probe)?;
        Ok(parse_remote_branches(&out))
    }

    fn tags(&self, repo: &Path) -> TpromptsResult<Vec<String>> {
        let out = self.git_ok(
            Some(repo),
            &["tag", "--sort=-version:refname"],
            self.timeouts.probe,
        )?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// `git branch -r` output without symbolic refs or the remote prefix
fn parse_remote_branches(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains("->"))
        .map(|line| match line.split_once('/') {
            Some((_remote, branch)) => branch.to_string(),
            None => line.to_string(),
        })
        .collect()
}

fn looks_unreachable(stderr: &str) -> bool {
    let stderr = stderr.to_lowercase();
    [
        "not found",
        "does not exist",
        "could not resolve host",
        "unable to access",
        "could not read from remote",
        "does not appear to be a git repository",
    ]
    .iter()
    .any(|needle| stderr.contains(needle))
}

fn looks_unresolved(stderr: &str) -> bool {
    let stderr = stderr.to_lowercase();
    stderr.contains("did not match any") || stderr.contains("unknown revision")
        || stderr.contains("invalid reference")
}
