//! Domain Services
//!
//! Installation logic that operates on domain entities. All disk access goes
//! through the `FileSystem` port.

mod file_processor;
mod pruner;

pub use file_processor::{
    ApplyReport, FileProcessor, SkipReason, SkippedEntry, TargetFailure, TargetPlan,
};
pub use pruner::{DirectoryPruner, DEFAULT_PROTECTED_DIRS};
