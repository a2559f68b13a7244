use tprompts::application::{RegisterResult, UnregisterResult};

use crate::ui::blocks::summary::ResultSummary;

pub fn render_register_result(
    result: &RegisterResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let record = &result.record;
    let mut summary = ResultSummary::success(format!(
        "Registered '{}' ({})",
        record.name, record.kind
    ));
    if let Some(version) = &record.current_version {
        summary.add_info(format!("version {}", version));
    }
    if result.made_default {
        summary.add_info("set as default repository");
    }
    summary.with_next_step(format!("tprompts list {}", record.name));
    summary.render(supports_color, supports_unicode)
}

pub fn render_unregister_result(
    result: &UnregisterResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if result.cleanup_error.is_some() {
        ResultSummary::partial(format!("Unregistered '{}'", result.record.name))
    } else {
        ResultSummary::success(format!("Unregistered '{}'", result.record.name))
    };
    if let Some(path) = &result.removed_files {
        summary.add_info(format!("deleted {}", path.display()));
    }
    if let Some(error) = &result.cleanup_error {
        summary.add_warning(format!("files were not deleted: {}", error));
    }
    if result.was_default {
        summary.add_warning("no default repository is set now");
    }
    summary.render(supports_color, supports_unicode)
}
