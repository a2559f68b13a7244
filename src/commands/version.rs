use anyhow::Result;

use tprompts::application::VersionUseCase;

use super::Context;
use crate::ui::json;
use crate::ui::views::version::{render_version_info, render_version_list};

pub fn cmd_version(ctx: &Context, repository: &str, list: bool, checkout: Option<&str>) -> Result<()> {
    let use_case = VersionUseCase::new(&ctx.registry, &ctx.git, ctx.repositories_dir());

    if let Some(version) = checkout {
        let record = use_case.checkout(repository, version)?;
        if ctx.json() {
            json::emit(serde_json::json!({
                "event": "checkout",
                "name": record.name,
                "version": version,
            }))?;
        } else {
            println!("Checked out {} in '{}'", version, record.name);
        }
        return Ok(());
    }

    let info = use_case.current(repository)?;
    if list {
        let versions = use_case.list(repository)?;
        if ctx.json() {
            json::emit(serde_json::json!({
                "event": "versions",
                "name": repository,
                "current": info.current,
                "branches": versions.branches,
                "tags": versions.tags,
            }))?;
        } else {
            print!(
                "{}",
                render_version_list(repository, &versions, Some(info.current.as_str()))
            );
        }
        return Ok(());
    }

    if ctx.json() {
        json::emit(serde_json::json!({
            "event": "version",
            "name": repository,
            "current": info.current,
            "requested": info.requested,
        }))?;
    } else {
        print!("{}", render_version_info(&info, ctx.ui.color));
    }
    Ok(())
}
