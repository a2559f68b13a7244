//! Scripted VersionControl for source manager and use case tests

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use crate::domain::ports::{Head, VersionControl};
use crate::error::{TpromptsError, TpromptsResult};

pub(crate) struct FakeVcs {
    /// Files written into every clone (`relative path`, `content`)
    pub files: Vec<(String, String)>,
    pub branches: Vec<String>,
    pub tags: Vec<String>,
    pub unreachable: bool,
    /// Clone creates the directory, then fails
    pub fail_clone: bool,
    pub fail_pull: bool,
    pub calls: RefCell<Vec<String>>,
    pub head: RefCell<Head>,
}

impl FakeVcs {
    /// Upstream with one `react` prompt, branches `main`/`develop`, tag `v1.0.0`
    pub fn with_prompt() -> Self {
        Self {
            files: vec![
                (
                    "react/tprompts.json".to_string(),
                    r#"{"name":"react","editors":{"cursor":{"rules.md":{"location":".cursor/rules/react.md"}}}}"#
                        .to_string(),
                ),
                ("react/rules.md".to_string(), "Use hooks".to_string()),
            ],
            branches: vec!["main".to_string(), "develop".to_string()],
            tags: vec!["v1.0.0".to_string()],
            unreachable: false,
            fail_clone: false,
            fail_pull: false,
            calls: RefCell::new(Vec::new()),
            head: RefCell::new(Head::Branch("main".to_string())),
        }
    }

    /// Upstream with no prompt directories
    pub fn empty() -> Self {
        Self {
            files: vec![("README.md".to_string(), "nothing".to_string())],
            ..Self::with_prompt()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl VersionControl for FakeVcs {
    fn probe(&self, url: &str) -> TpromptsResult<()> {
        self.record(format!("probe {}", url));
        if self.unreachable {
            return Err(TpromptsError::RemoteUnreachable {
                url: url.to_string(),
                message: "repository not found".to_string(),
            });
        }
        Ok(())
    }

    fn clone_repo(&self, url: &str, dest: &Path) -> TpromptsResult<()> {
        self.record(format!("clone {}", url));
        if self.unreachable {
            return Err(TpromptsError::RemoteUnreachable {
                url: url.to_string(),
                message: "repository not found".to_string(),
            });
        }
        fs::create_dir_all(dest)?;
        if self.fail_clone {
            fs::write(dest.join("partial"), "x")?;
            return Err(TpromptsError::SubprocessFailed {
                command: "git clone".to_string(),
                message: "early EOF".to_string(),
            });
        }
        for (relative, content) in &self.files {
            let path = dest.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        Ok(())
    }

    fn fetch(&self, _repo: &Path) -> TpromptsResult<()> {
        self.record("fetch".to_string());
        Ok(())
    }

    fn pull(&self, _repo: &Path) -> TpromptsResult<()> {
        self.record("pull".to_string());
        if self.fail_pull {
            return Err(TpromptsError::SubprocessFailed {
                command: "git pull origin".to_string(),
                message: "merge conflict".to_string(),
            });
        }
        Ok(())
    }

    fn checkout(&self, _repo: &Path, reference: &str) -> TpromptsResult<()> {
        self.record(format!("checkout {}", reference));
        let head = if self.branches.iter().any(|b| b == reference) {
            Head::Branch(reference.to_string())
        } else if self.tags.iter().any(|t| t == reference) {
            Head::Detached("abc1234".to_string())
        } else {
            return Err(TpromptsError::VersionNotFound {
                version: reference.to_string(),
            });
        };
        *self.head.borrow_mut() = head;
        Ok(())
    }

    fn head(&self, _repo: &Path) -> TpromptsResult<Head> {
        Ok(self.head.borrow().clone())
    }

    fn remote_branches(&self, _repo: &Path) -> TpromptsResult<Vec<String>> {
        Ok(self.branches.clone())
    }

    fn tags(&self, _repo: &Path) -> TpromptsResult<Vec<String>> {
        Ok(self.tags.clone())
    }
}
