//! Per-user tprompts directory with test isolation support.
//!
//! `TPROMPTS_HOME` overrides the location of `~/.tprompts` entirely. Tests
//! and CI point it at a temp directory so the real registry is never touched.

use std::path::PathBuf;

/// Environment variable overriding the tprompts state directory
pub const TPROMPTS_HOME_VAR: &str = "TPROMPTS_HOME";

/// Directory holding `repos.json`, `config.toml` and managed checkouts.
///
/// Returns `None` only when neither `TPROMPTS_HOME` is set nor a home
/// directory can be resolved.
pub fn tprompts_home_dir() -> Option<PathBuf> {
    std::env::var_os(TPROMPTS_HOME_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".tprompts")))
}
