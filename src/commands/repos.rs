use anyhow::Result;

use super::Context;
use crate::ui::json;
use crate::ui::views::repos::render_repos;

pub fn cmd_repos(ctx: &Context, verbose: bool) -> Result<()> {
    let records = ctx.registry.list()?;
    let default = ctx.registry.get_default()?.map(|r| r.name);

    if ctx.json() {
        let repositories: Vec<_> = records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "name": r.name,
                    "kind": r.kind.as_str(),
                    "origin": r.origin,
                    "path": r.local_path.as_ref().map(|p| p.display().to_string()),
                    "current_version": r.current_version,
                    "requested_version": r.requested_version,
                    "last_updated": r.last_updated_at.map(|t| t.to_rfc3339()),
                    "default": default.as_deref() == Some(r.name.as_str()),
                })
            })
            .collect();
        json::emit(serde_json::json!({
            "event": "repos",
            "repositories": repositories,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_repos(
            &records,
            default.as_deref(),
            verbose,
            ctx.ui.color,
            ctx.ui.unicode
        )
    );
    Ok(())
}
