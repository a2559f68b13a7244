use tprompts::application::VersionInfo;
use tprompts::domain::ports::VersionList;

use crate::ui::primitives::text::ColoredText;

pub fn render_version_info(info: &VersionInfo, supports_color: bool) -> String {
    let mut out = format!(
        "{}: {}\n",
        info.repository.name,
        ColoredText::info(info.current.as_str())
            .bold()
            .render(supports_color)
    );
    if let Some(requested) = &info.requested {
        out.push_str(&format!(
            "{}\n",
            ColoredText::dim(format!("requested: {}", requested)).render(supports_color)
        ));
    }
    out
}

pub fn render_version_list(name: &str, versions: &VersionList, current: Option<&str>) -> String {
    if versions.is_empty() {
        return format!("{}: no branches or tags found\n", name);
    }

    let mut out = String::new();
    for (label, items) in [("Branches", &versions.branches), ("Tags", &versions.tags)] {
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("{}:\n", label));
        for item in items {
            let marker = if current == Some(item.as_str()) { "*" } else { " " };
            out.push_str(&format!("  {} {}\n", marker, item));
        }
    }
    out
}
