//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Provides atomic writes, home directory expansion, and standard file operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        // Ensure parent directories exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;
        }
        atomic_write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| FsError::at(path, e))? {
            let entry = entry.map_err(|e| FsError::at(path, e))?;
            let file_type = entry.file_type().map_err(|e| FsError::at(path, e))?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
                is_symlink: file_type.is_symlink(),
                path: entry.path(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        if path.is_dir() {
            std::fs::remove_dir(path).map_err(|e| FsError::at(path, e))
        } else {
            std::fs::remove_file(path).map_err(|e| FsError::at(path, e))
        }
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn expand_home(&self, path: &Path) -> PathBuf {
        expand_home(path)
    }
}

/// Write via a sibling temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FsError::at(dir, e))?;
    tmp.write_all(content).map_err(|e| FsError::at(path, e))?;
    tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
    Ok(())
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    let rest = if text == "~" {
        ""
    } else if let Some(rest) = text.strip_prefix("~/") {
        rest
    } else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.txt");
        let fs = LocalFs::new();

        fs.write(&file, b"hello world").unwrap();
        let content = fs.read(&file).unwrap();

        assert_eq!(content, b"hello world".to_vec());
    }

    #[test]
    fn local_fs_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("dir").join("test.txt");
        let fs = LocalFs::new();

        fs.write(&file, b"content").unwrap();

        assert!(file.exists());
    }

    #[test]
    fn local_fs_write_overwrites() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.txt");
        let fs = LocalFs::new();

        std::fs::write(&file, "Original").unwrap();
        fs.write(&file, b"Replaced").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "Replaced");
    }

    #[test]
    fn local_fs_read_dir_is_sorted() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        fs.write(&dir.path().join("b.md"), b"").unwrap();
        fs.write(&dir.path().join("a.md"), b"").unwrap();
        fs.create_dir_all(&dir.path().join("c")).unwrap();

        let entries = fs.read_dir(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["a.md", "b.md", "c"]);
        assert!(entries[2].is_dir);
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_read_dir_does_not_follow_symlinks() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entries = LocalFs::new().read_dir(dir.path()).unwrap();

        assert_eq!(entries[0].name, "link");
        assert!(!entries[0].is_dir);
        assert!(entries[0].is_symlink);
        assert!(entries[1].is_dir);
        assert!(!entries[1].is_symlink);
    }

    #[test]
    fn local_fs_remove_file_and_empty_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("sub/remove.txt");
        let fs = LocalFs::new();

        fs.write(&file, b"content").unwrap();
        fs.remove(&file).unwrap();
        assert!(!file.exists());

        fs.remove(&dir.path().join("sub")).unwrap();
        assert!(!dir.path().join("sub").exists());
    }

    #[test]
    fn local_fs_remove_refuses_non_empty_dir() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        fs.write(&dir.path().join("sub/keep.txt"), b"").unwrap();

        assert!(fs.remove(&dir.path().join("sub")).is_err());
    }

    #[test]
    fn local_fs_read_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let err = LocalFs::new().read(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn local_fs_expand_home() {
        let fs = LocalFs::new();

        // Non-home path unchanged
        let path = PathBuf::from("/tmp/test");
        assert_eq!(fs.expand_home(&path), path);

        // Home path expanded
        let home_path = PathBuf::from("~/.claude");
        let expanded = fs.expand_home(&home_path);
        if dirs::home_dir().is_some() {
            assert!(!expanded.to_string_lossy().contains('~'));
        }

        // Tilde in the middle is left alone
        let inner = PathBuf::from("a/~/b");
        assert_eq!(fs.expand_home(&inner), inner);
    }
}
