//! Install Use Case
//!
//! Computes the files a prompt/editor pair writes under an install root and
//! writes them. Confirmation and rendering stay in the CLI.

mod result;
mod use_case;


pub use result::{InstallPlan, RemovalPlan};
pub use use_case::{InstallUseCase, RemoveUseCase};
