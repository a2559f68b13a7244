use anyhow::{bail, Result};

use tprompts::application::{UpdateStatus, UpdateSummary, UpdateUseCase};

use super::Context;
use crate::ui::json;
use crate::ui::views::update::{render_update_status, render_update_summary};

pub fn cmd_update(
    ctx: &Context,
    repository: Option<&str>,
    all: bool,
    version: Option<&str>,
) -> Result<()> {
    let use_case = UpdateUseCase::new(&ctx.registry, &ctx.git, ctx.repositories_dir());

    match repository {
        Some(name) if !all => {
            let status = use_case.update_one(name, version)?;
            if ctx.json() {
                json::emit(status_json(name, &status))?;
            } else {
                print!(
                    "{}",
                    render_update_status(name, &status, ctx.ui.color, ctx.ui.unicode)
                );
            }
            Ok(())
        }
        _ => {
            let summary = use_case.update_all(version)?;
            report_summary(ctx, &summary)?;
            if summary.failed_count() > 0 {
                bail!("{} repository update(s) failed", summary.failed_count());
            }
            Ok(())
        }
    }
}

fn report_summary(ctx: &Context, summary: &UpdateSummary) -> Result<()> {
    if ctx.json() {
        let outcomes: Vec<_> = summary
            .outcomes
            .iter()
            .map(|o| status_json(&o.name, &o.status))
            .collect();
        json::emit(serde_json::json!({
            "event": "update",
            "updated": summary.updated_count(),
            "skipped": summary.skipped_count(),
            "failed": summary.failed_count(),
            "repositories": outcomes,
        }))?;
    } else {
        print!(
            "{}",
            render_update_summary(summary, ctx.ui.color, ctx.ui.unicode)
        );
    }
    Ok(())
}

fn status_json(name: &str, status: &UpdateStatus) -> serde_json::Value {
    match status {
        UpdateStatus::Updated { version } => serde_json::json!({
            "name": name,
            "status": "updated",
            "version": version,
        }),
        UpdateStatus::SkippedLocal => serde_json::json!({
            "name": name,
            "status": "skipped",
        }),
        UpdateStatus::Failed { message } => serde_json::json!({
            "name": name,
            "status": "failed",
            "error": message,
        }),
    }
}
