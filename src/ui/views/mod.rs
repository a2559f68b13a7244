pub mod install;
pub mod list;
pub mod register;
pub mod repos;
pub mod update;
pub mod version;

use std::path::Path;

/// `path` relative to `root` when beneath it, otherwise as given
pub(crate) fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
