//! Lexical path resolution
//!
//! Destinations are computed without touching the disk: `.` and `..` are
//! folded against the base the same way a shell would resolve them, so a
//! target list can be computed for files that do not exist yet.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base`.
///
/// Absolute `path`s replace `base`. `..` never climbs above the root.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// Fold `.` and `..` components lexically
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_relative_location() {
        assert_eq!(
            resolve(Path::new("/work"), Path::new(".cursor/rules/")),
            PathBuf::from("/work/.cursor/rules")
        );
    }

    #[test]
    fn resolve_current_dir_location() {
        assert_eq!(
            resolve(Path::new("/work"), Path::new("./CLAUDE.md")),
            PathBuf::from("/work/CLAUDE.md")
        );
    }

    #[test]
    fn resolve_parent_components() {
        assert_eq!(
            resolve(Path::new("/work/project"), Path::new("../shared/x.md")),
            PathBuf::from("/work/shared/x.md")
        );
    }

    #[test]
    fn resolve_absolute_location_replaces_base() {
        assert_eq!(
            resolve(Path::new("/work"), Path::new("/etc/rules.md")),
            PathBuf::from("/etc/rules.md")
        );
    }

    #[test]
    fn parent_never_climbs_above_root() {
        assert_eq!(normalize(Path::new("/../../a")), PathBuf::from("/a"));
    }

    #[test]
    fn relative_paths_keep_leading_parents() {
        assert_eq!(normalize(Path::new("../a/./b")), PathBuf::from("../a/b"));
    }
}
