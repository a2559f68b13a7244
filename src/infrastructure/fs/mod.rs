//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{tprompts_home_dir, TPROMPTS_HOME_VAR};
pub use local::{expand_home, LocalFs};
