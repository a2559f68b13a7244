use tprompts::application::{UpdateStatus, UpdateSummary};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_update_status(
    name: &str,
    status: &UpdateStatus,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match status {
        UpdateStatus::Updated { version } => {
            let version = version
                .as_deref()
                .map(|v| format!(" ({})", v))
                .unwrap_or_default();
            format!(
                "{} {} updated{}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                name,
                version
            )
        }
        UpdateStatus::SkippedLocal => format!(
            "{} {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            name,
            ColoredText::dim("skipped (local repository)").render(supports_color)
        ),
        UpdateStatus::Failed { message } => format!(
            "{} {} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            name,
            ColoredText::error(format!("failed: {}", message)).render(supports_color)
        ),
    }
}

pub fn render_update_summary(
    summary: &UpdateSummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out: String = summary
        .outcomes
        .iter()
        .map(|o| render_update_status(&o.name, &o.status, supports_color, supports_unicode))
        .collect();

    let mut block = if summary.failed_count() == 0 {
        ResultSummary::success("Update complete")
    } else {
        ResultSummary::partial("Update finished with errors")
    };
    block.add_stat("updated", summary.updated_count());
    block.add_stat("skipped", summary.skipped_count());
    block.add_stat("failed", summary.failed_count());
    out.push_str(&block.render(supports_color, supports_unicode));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tprompts::application::UpdateOutcome;

    #[test]
    fn summary_lists_every_outcome() {
        let summary = UpdateSummary {
            outcomes: vec![
                UpdateOutcome {
                    name: "team".to_string(),
                    status: UpdateStatus::Updated {
                        version: Some("main".to_string()),
                    },
                },
                UpdateOutcome {
                    name: "mine".to_string(),
                    status: UpdateStatus::SkippedLocal,
                },
                UpdateOutcome {
                    name: "old".to_string(),
                    status: UpdateStatus::Failed {
                        message: "merge conflict".to_string(),
                    },
                },
            ],
        };

        insta::assert_snapshot!(render_update_summary(&summary, false, false).trim_end(), @r"
        [OK] team updated (main)
        [>] mine skipped (local repository)
        [FAIL] old failed: merge conflict
        [WARN] Update finished with errors
          1 updated, 1 skipped, 1 failed
        ");
    }
}
