//! register / unregister

use anyhow::{bail, Result};

use tprompts::application::{RegisterOptions, RegisterUseCase};

use super::Context;
use crate::ui::json;
use crate::ui::prompt::confirm;
use crate::ui::views::register::{render_register_result, render_unregister_result};

pub fn cmd_register(
    ctx: &Context,
    source: String,
    name: Option<String>,
    make_default: bool,
    version: Option<String>,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let use_case = RegisterUseCase::new(&ctx.registry, &ctx.git, ctx.repositories_dir(), cwd);

    if !ctx.json() {
        println!("Registering {}...", source);
    }
    let result = use_case.register(&RegisterOptions {
        source,
        name,
        make_default,
        version,
    })?;

    if ctx.json() {
        let record = &result.record;
        json::emit(serde_json::json!({
            "event": "register",
            "name": record.name,
            "kind": record.kind.as_str(),
            "origin": record.origin,
            "path": record.local_path.as_ref().map(|p| p.display().to_string()),
            "version": record.current_version,
            "default": result.made_default,
        }))?;
    } else {
        print!(
            "{}",
            render_register_result(&result, ctx.ui.color, ctx.ui.unicode)
        );
    }
    Ok(())
}

pub fn cmd_unregister(ctx: &Context, name: &str, keep_files: bool, yes: bool) -> Result<()> {
    let record = ctx.registry.require(name)?;

    if !yes {
        if !ctx.ui.interactive() {
            bail!("refusing to unregister '{}' without confirmation; pass --yes", name);
        }
        let question = if record.is_versioned() && !keep_files {
            format!("Unregister '{}' and delete its cloned files?", name)
        } else {
            format!("Unregister '{}'?", name)
        };
        if !confirm(question)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let use_case = RegisterUseCase::new(
        &ctx.registry,
        &ctx.git,
        ctx.repositories_dir(),
        std::env::current_dir()?,
    );
    let result = use_case.unregister(name, keep_files)?;

    if ctx.json() {
        json::emit(serde_json::json!({
            "event": "unregister",
            "name": result.record.name,
            "was_default": result.was_default,
            "removed_files": result.removed_files.as_ref().map(|p| p.display().to_string()),
            "cleanup_error": result.cleanup_error,
        }))?;
    } else {
        print!(
            "{}",
            render_unregister_result(&result, ctx.ui.color, ctx.ui.unicode)
        );
    }
    Ok(())
}
