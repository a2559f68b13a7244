//! Command handlers
//!
//! Each handler resolves its dependencies from a [`Context`], runs one use
//! case and renders the result (human text or one JSON object).

pub mod install;
pub mod list;
pub mod register;
pub mod repos;
pub mod update;
pub mod version;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use tprompts::application::RegistryUseCase;
use tprompts::config::{with_env_overrides, UserConfig};
use tprompts::infrastructure::{tprompts_home_dir, GitCli, JsonRegistryStore};
use tprompts::TpromptsError;

use crate::ui::context::UiContext;

/// Dependencies shared by every command
pub struct Context {
    pub home: PathBuf,
    pub config: UserConfig,
    pub registry: RegistryUseCase,
    pub git: GitCli,
    pub ui: UiContext,
}

impl Context {
    pub fn load(json: bool) -> Result<Self> {
        let home = tprompts_home_dir().ok_or(TpromptsError::NoHomeDirectory)?;
        let (config, warnings) = UserConfig::load(&home)?;
        let config = with_env_overrides(config, |key| std::env::var(key).ok());
        for warning in &warnings {
            eprintln!("Warning: {}", warning);
        }

        let registry = RegistryUseCase::new(Arc::new(JsonRegistryStore::in_home(&home)));
        let git = GitCli::new(config.timeouts.git_timeouts());

        Ok(Self {
            home,
            config,
            registry,
            git,
            ui: UiContext::new(json),
        })
    }

    pub fn repositories_dir(&self) -> PathBuf {
        self.config.repositories_dir(&self.home)
    }

    pub fn json(&self) -> bool {
        self.ui.json
    }
}
