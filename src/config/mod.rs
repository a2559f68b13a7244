//! User configuration for tprompts
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`TPROMPTS_*`)
//! 3. User config (`~/.tprompts/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{load_with_warnings, with_env_overrides, ConfigWarning, CONFIG_FILE};
pub use types::{TimeoutConfig, UserConfig};
