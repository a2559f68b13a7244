//! InstallationTarget entity - one file to write or delete
//!
//! Computed per invocation by the file processor, never persisted.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationTarget {
    pub source_path: PathBuf,
    /// Absolute destination
    pub target_path: PathBuf,
    /// Content after prefix/suffix wrapping
    pub content: Vec<u8>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl InstallationTarget {
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}
