//! Version control implementations

mod command;
mod git;

pub use git::{GitCli, GitTimeouts};
