//! Error types for tprompts
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::ports::{FsError, RegistryError};

/// Result type alias for tprompts operations
pub type TpromptsResult<T> = Result<T, TpromptsError>;

/// Main error type for tprompts operations
#[derive(Error, Debug)]
pub enum TpromptsError {
    /// Identifier could not be parsed
    #[error("invalid prompt identifier '{identifier}': {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    /// Repository is not registered
    #[error("repository '{name}' is not registered")]
    RepositoryNotFound { name: String },

    /// Prompt directory or manifest missing
    #[error("prompt '{prompt}' not found in repository '{repository}'")]
    PromptNotFound { prompt: String, repository: String },

    /// Bare prompt identifier used without a default repository
    #[error("no default repository set; use repo/prompt format or register one with --default")]
    NoDefaultRepository,

    /// Directory expected on disk is absent
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Path exists but is not a directory
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Registration under a name already in use
    #[error("repository '{name}' is already registered")]
    DuplicateRepository { name: String },

    /// Manifest present but unusable
    #[error("malformed manifest at {path}: {message}")]
    MalformedManifest { path: PathBuf, message: String },

    /// Repository contains no prompt directories
    #[error("no prompts found in {path} (expected a subdirectory containing tprompts.json)")]
    NoPromptsFound { path: PathBuf },

    /// Editor unknown or not supported by the prompt
    #[error("unsupported editor '{editor}' (supported: {})", supported.join(", "))]
    UnsupportedEditor {
        editor: String,
        supported: Vec<String>,
    },

    /// Version operation requested on a non-versioned repository
    #[error("repository '{name}' is a local repository and has no versions")]
    NotVersioned { name: String },

    /// Source URL could not be turned into a clone URL
    #[error("invalid repository URL: {url}")]
    InvalidSourceUrl { url: String },

    /// Subprocess exceeded its time budget
    #[error("{operation} timed out after {}s", timeout.as_secs())]
    Timeout { operation: String, timeout: Duration },

    /// Remote could not be reached or does not exist
    #[error("remote unreachable: {url}: {message}")]
    RemoteUnreachable { url: String, message: String },

    /// Subprocess exited unsuccessfully or could not start
    #[error("command `{command}` failed: {message}")]
    SubprocessFailed { command: String, message: String },

    /// Branch, tag or commit does not resolve
    #[error("version '{version}' not found")]
    VersionNotFound { version: String },

    /// User configuration could not be parsed
    #[error("invalid configuration in {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    /// Home directory could not be determined
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File system port error
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Registry persistence error
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
