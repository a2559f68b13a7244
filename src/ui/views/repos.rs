//! Registered repository listing

use tprompts::RepositoryRecord;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_repos(
    records: &[RepositoryRecord],
    default: Option<&str>,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out =
        CommandHeader::new(Icon::Repo, "Registered repositories").render(supports_color, supports_unicode);

    if records.is_empty() {
        out.push_str("No repositories registered.\n");
        out.push_str(&format!(
            "{} {} tprompts register <git-url|path> --default\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim("Next:").render(supports_color)
        ));
        return out;
    }

    for record in records {
        let marker = if default == Some(record.name.as_str()) {
            Icon::Default.colored(supports_color, supports_unicode)
        } else {
            " ".to_string()
        };
        out.push_str(&format!(
            "{} {} {} {}\n",
            marker,
            ColoredText::info(record.name.as_str())
                .bold()
                .render(supports_color),
            ColoredText::dim(format!("({})", record.kind)).render(supports_color),
            record.origin
        ));

        if verbose {
            out.push_str(&render_details(record));
        }
    }
    out
}

fn render_details(record: &RepositoryRecord) -> String {
    let mut lines = Vec::new();
    if let Some(path) = &record.local_path {
        lines.push(format!("path: {}", path.display()));
    }
    match (&record.current_version, &record.requested_version) {
        (Some(current), Some(requested)) if current != requested => {
            lines.push(format!("version: {} (requested {})", current, requested));
        }
        (Some(current), _) => lines.push(format!("version: {}", current)),
        (None, Some(requested)) => lines.push(format!("version: {}", requested)),
        (None, None) => {}
    }
    if let Some(updated) = record.last_updated_at {
        lines.push(format!("updated: {}", updated.format("%Y-%m-%d %H:%M UTC")));
    }
    if let Some(meta) = &record.metadata {
        if let Some(description) = &meta.description {
            lines.push(format!("description: {}", description));
        }
        if let Some(author) = &meta.author {
            lines.push(format!("author: {}", author));
        }
        if !meta.categories.is_empty() {
            lines.push(format!("categories: {}", meta.categories.join(", ")));
        }
    }
    lines.iter().map(|l| format!("    {}\n", l)).collect()
}
