//! Empty directory pruning
//!
//! After a removal, directories left empty are deleted bottom-up. The walk is
//! a bounded loop: it stops at the install root, at the first directory that
//! is not empty, at any protected directory, or at the first failure.

use std::path::{Component, Path, PathBuf};

use crate::domain::ports::FileSystem;

/// Top-level directory names whose subtrees are never pruned
pub const DEFAULT_PROTECTED_DIRS: [&str; 6] = [".git", "node_modules", "src", "lib", "dist", "build"];

#[derive(Debug, Clone)]
pub struct DirectoryPruner {
    root: PathBuf,
    protected: Vec<String>,
}

impl DirectoryPruner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            protected: DEFAULT_PROTECTED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_protected<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Remove `start` and its ancestors while they are empty.
    ///
    /// Returns the directories removed. Never fails.
    pub fn prune<FS: FileSystem + ?Sized>(&self, fs: &FS, start: &Path) -> Vec<PathBuf> {
        let mut removed = Vec::new();
        let Ok(relative) = start.strip_prefix(&self.root) else {
            return removed;
        };
        let depth = relative.components().count();
        let mut current = start.to_path_buf();

        for _ in 0..depth {
            if current == self.root || self.is_protected(&current) {
                break;
            }
            let is_empty = match fs.read_dir(&current) {
                Ok(entries) => entries.is_empty(),
                Err(_) => false,
            };
            if !is_empty {
                break;
            }
            if let Err(e) = fs.remove(&current) {
                log::debug!("Leaving {} in place: {}", current.display(), e);
                break;
            }
            removed.push(current.clone());
            if !current.pop() {
                break;
            }
        }
        removed
    }

    fn is_protected(&self, dir: &Path) -> bool {
        let Ok(relative) = dir.strip_prefix(&self.root) else {
            return true;
        };
        // Only the top-level segment counts: `src/a` is kept, `.cursor/lib` is not
        match relative.components().next() {
            Some(Component::Normal(name)) => self
                .protected
                .iter()
                .any(|p| name.to_str() == Some(p.as_str())),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::LocalFs;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn prunes_empty_chain_up_to_root() {
        let dir = tempdir().unwrap();
        let leaf = dir.path().join(".cursor/rules/python");
        fs::create_dir_all(&leaf).unwrap();

        let removed = DirectoryPruner::new(dir.path()).prune(&LocalFs::new(), &leaf);

        assert_eq!(removed.len(), 3);
        assert!(!dir.path().join(".cursor").exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn stops_at_non_empty_directory() {
        let dir = tempdir().unwrap();
        let leaf = dir.path().join(".cursor/rules");
        fs::create_dir_all(&leaf).unwrap();
        fs::write(dir.path().join(".cursor/settings.json"), "{}").unwrap();

        let removed = DirectoryPruner::new(dir.path()).prune(&LocalFs::new(), &leaf);

        assert_eq!(removed, vec![leaf.clone()]);
        assert!(dir.path().join(".cursor/settings.json").exists());
    }

    #[test]
    fn never_removes_protected_directories() {
        let dir = tempdir().unwrap();
        let leaf = dir.path().join("src/prompts");
        fs::create_dir_all(&leaf).unwrap();

        let removed = DirectoryPruner::new(dir.path()).prune(&LocalFs::new(), &leaf);

        assert!(removed.is_empty());
        assert!(leaf.exists());
    }

    #[test]
    fn protected_names_below_top_level_are_pruned() {
        let dir = tempdir().unwrap();
        let leaf = dir.path().join(".cursor/rules/lib");
        fs::create_dir_all(&leaf).unwrap();

        let removed = DirectoryPruner::new(dir.path()).prune(&LocalFs::new(), &leaf);

        assert_eq!(removed.len(), 3);
        assert!(!dir.path().join(".cursor").exists());
    }

    #[test]
    fn custom_protected_set_replaces_default() {
        let dir = tempdir().unwrap();
        let unprotected = dir.path().join("src/inner");
        let kept = dir.path().join("keep/inner");
        fs::create_dir_all(&unprotected).unwrap();
        fs::create_dir_all(&kept).unwrap();

        let pruner = DirectoryPruner::new(dir.path()).with_protected(["keep"]);
        pruner.prune(&LocalFs::new(), &unprotected);
        pruner.prune(&LocalFs::new(), &kept);

        assert!(!dir.path().join("src").exists());
        assert!(kept.exists());
    }

    #[test]
    fn ignores_paths_outside_root() {
        let root = tempdir().unwrap();
        let other = tempdir().unwrap();
        let leaf = other.path().join("a");
        fs::create_dir_all(&leaf).unwrap();

        let removed = DirectoryPruner::new(root.path()).prune(&LocalFs::new(), &leaf);

        assert!(removed.is_empty());
        assert!(leaf.exists());
    }

    #[test]
    fn root_itself_is_never_removed() {
        let dir = tempdir().unwrap();
        let removed = DirectoryPruner::new(dir.path()).prune(&LocalFs::new(), dir.path());
        assert!(removed.is_empty());
        assert!(dir.path().exists());
    }
}
