//! Install and remove views

use std::path::Path;

use tprompts::application::{InstallPlan, RemovalPlan};
use tprompts::domain::services::{ApplyReport, SkippedEntry};
use tprompts::Editor;

use super::display_relative;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_install_header(
    prompt: &str,
    editor: Editor,
    install_root: &Path,
    dry_run: bool,
    removing: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, action) = if removing {
        (Icon::Remove, "Remove")
    } else {
        (Icon::Install, "Install")
    };
    let title = if dry_run {
        format!("{} {} (Dry Run)", action, prompt)
    } else {
        format!("{} {}", action, prompt)
    };
    let mut header = CommandHeader::new(icon, title);
    header.add("Editor", editor.display_name());
    header.add("Directory", install_root.display().to_string());
    header.render(supports_color, supports_unicode)
}

pub fn render_install_plan(plan: &InstallPlan, supports_color: bool) -> String {
    let mut out = String::new();
    for target in &plan.targets {
        let path = display_relative(&target.target_path, &plan.install_root);
        if plan.existing.contains(&target.target_path) {
            out.push_str(&format!(
                "  ~ {} {}\n",
                path,
                ColoredText::warning("(overwrite)").render(supports_color)
            ));
        } else {
            out.push_str(&format!("  + {}\n", path));
        }
    }
    out.push_str(&render_skipped(&plan.skipped, supports_color));
    out
}

pub fn render_removal_plan(plan: &RemovalPlan, supports_color: bool) -> String {
    let mut out = String::new();
    if !plan.present.is_empty() {
        out.push_str(
            &ColoredText::warning("Files to remove:")
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        for target in &plan.present {
            out.push_str(&format!(
                "  - {}\n",
                display_relative(&target.target_path, &plan.install_root)
            ));
        }
    }
    if !plan.missing.is_empty() {
        out.push_str(&ColoredText::dim("Configured but not present:").render(supports_color));
        out.push('\n');
        for target in &plan.missing {
            out.push_str(&format!(
                "  {}\n",
                display_relative(&target.target_path, &plan.install_root)
            ));
        }
    }
    out.push_str(&render_skipped(&plan.skipped, supports_color));
    out
}

fn render_skipped(skipped: &[SkippedEntry], supports_color: bool) -> String {
    skipped
        .iter()
        .map(|entry| {
            format!(
                "  {}\n",
                ColoredText::dim(format!("skipped {} ({})", entry.relative_path, entry.reason))
                    .render(supports_color)
            )
        })
        .collect()
}

/// Summary after writing or deleting targets
pub fn render_apply_result(
    report: &ApplyReport,
    install_root: &Path,
    removing: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let noun = if removing { "Removal" } else { "Install" };
    let mut summary = if report.is_success() {
        ResultSummary::success(format!("{} complete", noun))
    } else {
        ResultSummary::partial(format!("{} finished with errors", noun))
    };
    summary.add_stat("succeeded", report.succeeded_count());
    summary.add_stat("failed", report.failed_count());
    if removing && !report.pruned.is_empty() {
        summary.add_stat("empty directories pruned", report.pruned.len());
    }
    for failure in &report.failed {
        summary.add_warning(format!(
            "{}: {}",
            display_relative(&failure.path, install_root),
            failure.message
        ));
    }
    summary.render(supports_color, supports_unicode)
}
