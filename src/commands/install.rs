//! install / remove
//!
//! Both commands resolve the prompt first so the editor choice can be
//! limited to what its manifest supports. Ephemeral checkouts created for
//! URL identifiers are released whatever the outcome.

use std::path::Path;

use anyhow::{bail, Result};

use tprompts::application::{
    InstallPlan, InstallUseCase, PromptResolver, RemovalPlan, RemoveUseCase, ResolvedPrompt,
};
use tprompts::domain::services::ApplyReport;
use tprompts::infrastructure::LocalFs;
use tprompts::{Editor, ParsedIdentifier, TpromptsError};

use super::Context;
use crate::ui::json;
use crate::ui::prompt::{confirm, select_editor};
use crate::ui::views::install::{
    render_apply_result, render_install_header, render_install_plan, render_removal_plan,
};

pub struct InstallArgs {
    pub identifier: String,
    pub editor: Option<Editor>,
    pub force: bool,
    pub dry_run: bool,
    pub version: Option<String>,
}

pub fn cmd_install(ctx: &Context, args: InstallArgs) -> Result<()> {
    let identifier = ParsedIdentifier::parse(&args.identifier)?;
    if args.version.is_some() && !identifier.is_url {
        log::warn!("--version only applies to URL identifiers; ignoring it");
    }

    let resolver = PromptResolver::new(&ctx.registry, &ctx.git, ctx.repositories_dir());
    let prompt = resolver.resolve(&identifier, args.version.as_deref())?;
    let result = install_resolved(ctx, &prompt, &args);
    prompt.finish();
    result
}

fn install_resolved(ctx: &Context, prompt: &ResolvedPrompt, args: &InstallArgs) -> Result<()> {
    let editor = resolve_editor(ctx, prompt, args.editor)?;
    let cwd = std::env::current_dir()?;
    let fs = LocalFs::new();
    let use_case = InstallUseCase::new(&fs);
    let plan = use_case.plan(prompt, editor, &cwd)?;
    let name = prompt.identifier.display_name();

    if !ctx.json() {
        print!(
            "{}",
            render_install_header(&name, editor, &cwd, args.dry_run, false, ctx.ui.color, ctx.ui.unicode)
        );
        print!("{}", render_install_plan(&plan, ctx.ui.color));
    }

    if plan.is_empty() {
        if ctx.json() {
            emit_result(&name, editor, "install", args.dry_run, &ApplyReport::new())?;
        } else {
            println!("Nothing to install.");
        }
        return Ok(());
    }

    if args.dry_run {
        if ctx.json() {
            emit_plan(&name, editor, &plan)?;
        } else {
            println!("Dry run: {} file(s) would be written.", plan.targets.len());
        }
        return Ok(());
    }

    if plan.has_conflicts() && !args.force && !confirm_overwrite(ctx, &plan)? {
        println!("Aborted.");
        return Ok(());
    }

    let report = use_case.execute(&plan);
    finish(ctx, &name, editor, "install", &report, &cwd)
}

fn confirm_overwrite(ctx: &Context, plan: &InstallPlan) -> Result<bool> {
    if !ctx.ui.interactive() {
        bail!(
            "{} file(s) already exist; pass --force to overwrite",
            plan.existing.len()
        );
    }
    confirm(format!("Overwrite {} existing file(s)?", plan.existing.len()))
}

pub struct RemoveArgs {
    pub identifier: String,
    pub editor: Option<Editor>,
    pub force: bool,
    pub dry_run: bool,
}

pub fn cmd_remove(ctx: &Context, args: RemoveArgs) -> Result<()> {
    let identifier = ParsedIdentifier::parse(&args.identifier)?;
    let resolver = PromptResolver::new(&ctx.registry, &ctx.git, ctx.repositories_dir());
    let prompt = resolver.resolve_registered(&identifier)?;
    let result = remove_resolved(ctx, &prompt, &args);
    prompt.finish();
    result
}

fn remove_resolved(ctx: &Context, prompt: &ResolvedPrompt, args: &RemoveArgs) -> Result<()> {
    let editor = resolve_editor(ctx, prompt, args.editor)?;
    let cwd = std::env::current_dir()?;
    let fs = LocalFs::new();
    let use_case = RemoveUseCase::new(&fs, ctx.config.protected_dirs.clone());
    let plan = use_case.plan(prompt, editor, &cwd)?;
    let name = prompt.identifier.display_name();

    if !ctx.json() {
        print!(
            "{}",
            render_install_header(&name, editor, &cwd, args.dry_run, true, ctx.ui.color, ctx.ui.unicode)
        );
        print!("{}", render_removal_plan(&plan, ctx.ui.color));
    }

    if plan.is_empty() {
        if ctx.json() {
            emit_result(&name, editor, "remove", args.dry_run, &ApplyReport::new())?;
        } else if plan.is_unconfigured() {
            println!("No files configured for {}.", editor.display_name());
        } else {
            println!("No installed files found.");
        }
        return Ok(());
    }

    if args.dry_run {
        if ctx.json() {
            emit_removal_plan(&name, editor, &plan)?;
        } else {
            println!("Dry run: {} file(s) would be removed.", plan.present.len());
        }
        return Ok(());
    }

    if !args.force {
        if !ctx.ui.interactive() {
            bail!("refusing to remove files without confirmation; pass --force");
        }
        if !confirm(format!("Remove {} file(s)?", plan.present.len()))? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let report = use_case.execute(&plan);
    finish(ctx, &name, editor, "remove", &report, &cwd)
}

/// Editor from the command line, then config, then an interactive choice
fn resolve_editor(ctx: &Context, prompt: &ResolvedPrompt, explicit: Option<Editor>) -> Result<Editor> {
    let supported: Vec<Editor> = Editor::ALL
        .into_iter()
        .filter(|e| prompt.manifest.editor(e.as_str()).is_some())
        .collect();

    choose_editor(
        explicit,
        ctx.config.default_editor.as_deref(),
        &supported,
        ctx.ui.interactive(),
        select_editor,
    )
}

fn choose_editor(
    explicit: Option<Editor>,
    configured: Option<&str>,
    supported: &[Editor],
    interactive: bool,
    pick: impl FnOnce(&[Editor]) -> Result<Option<Editor>>,
) -> Result<Editor> {
    if let Some(editor) = explicit {
        return Ok(editor);
    }
    if let Some(name) = configured {
        return Ok(name.parse::<Editor>()?);
    }
    if supported.is_empty() {
        bail!("prompt does not support any known editor");
    }
    if !interactive {
        return Err(TpromptsError::UnsupportedEditor {
            editor: "(none)".to_string(),
            supported: supported.iter().map(|e| e.as_str().to_string()).collect(),
        }
        .into());
    }
    match pick(supported)? {
        Some(editor) => Ok(editor),
        None => bail!("no editor selected"),
    }
}

fn finish(
    ctx: &Context,
    name: &str,
    editor: Editor,
    command: &str,
    report: &ApplyReport,
    install_root: &Path,
) -> Result<()> {
    if ctx.json() {
        emit_result(name, editor, command, false, report)?;
    } else {
        print!(
            "{}",
            render_apply_result(report, install_root, command == "remove", ctx.ui.color, ctx.ui.unicode)
        );
    }

    if !report.is_success() {
        bail!("{} file(s) failed", report.failed_count());
    }
    Ok(())
}

fn emit_result(name: &str, editor: Editor, command: &str, dry_run: bool, report: &ApplyReport) -> Result<()> {
    let errors: Vec<_> = report
        .failed
        .iter()
        .map(|f| serde_json::json!({ "path": f.path.display().to_string(), "message": f.message }))
        .collect();
    json::emit(serde_json::json!({
        "event": command,
        "prompt": name,
        "editor": editor.as_str(),
        "dry_run": dry_run,
        "status": if report.is_success() { "success" } else { "partial" },
        "succeeded": report.succeeded_count(),
        "failed": report.failed_count(),
        "files": report.succeeded.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        "errors": errors,
    }))?;
    Ok(())
}

fn emit_plan(name: &str, editor: Editor, plan: &InstallPlan) -> Result<()> {
    json::emit(serde_json::json!({
        "event": "install",
        "prompt": name,
        "editor": editor.as_str(),
        "dry_run": true,
        "files": plan.targets.iter().map(|t| t.target_path.display().to_string()).collect::<Vec<_>>(),
        "existing": plan.existing.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
    }))?;
    Ok(())
}

fn emit_removal_plan(name: &str, editor: Editor, plan: &RemovalPlan) -> Result<()> {
    json::emit(serde_json::json!({
        "event": "remove",
        "prompt": name,
        "editor": editor.as_str(),
        "dry_run": true,
        "files": plan.present.iter().map(|t| t.target_path.display().to_string()).collect::<Vec<_>>(),
        "missing": plan.missing.iter().map(|t| t.target_path.display().to_string()).collect::<Vec<_>>(),
    }))?;
    Ok(())
}
