//! FileSystem port - abstraction over file I/O operations
//!
//! The file processor and the pruner only talk to disk through this trait,
//! so the installation engine can be exercised against a fake in tests.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io { path: PathBuf, source: std::io::Error },
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the offending path to an I/O error
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => {
                write!(f, "I/O error at {}: {}", path.display(), source)
            }
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A single directory entry as reported by [`FileSystem::read_dir`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    /// Type of the entry itself; a symlink is never a directory here
    pub is_dir: bool,
    pub is_symlink: bool,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test fakes that inject failures
pub trait FileSystem {
    /// Read raw file bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write bytes, creating parent directories and overwriting unconditionally
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// List a directory, sorted by entry name
    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Remove a file (or an empty directory)
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything beneath it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Expand ~ to home directory
    fn expand_home(&self, path: &Path) -> PathBuf;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_error_display() {
        let err = FsError::NotFound(PathBuf::from("test.txt"));
        assert!(err.to_string().contains("test.txt"));
    }

    #[test]
    fn fs_error_at_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let fs_err = FsError::at(Path::new("a/b.md"), io_err);
        assert!(matches!(fs_err, FsError::NotFound(ref p) if p == Path::new("a/b.md")));
    }

    #[test]
    fn fs_error_at_wraps_other_kinds() {
        let io_err = std::io::Error::other("disk on fire");
        let fs_err = FsError::at(Path::new("x"), io_err);
        assert!(fs_err.to_string().contains("disk on fire"));
    }
}
