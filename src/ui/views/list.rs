//! Prompt listing

use tprompts::application::{PromptListing, RepositoryPrompts};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_prompt_listing(
    repositories: &[RepositoryPrompts],
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if repositories.is_empty() {
        return "No repositories registered.\n".to_string();
    }

    let mut out = String::new();
    for (index, entry) in repositories.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let mut title = ColoredText::info(entry.repository.name.as_str())
            .bold()
            .render(supports_color);
        if entry.is_default {
            title.push_str(&ColoredText::dim(" (default)").render(supports_color));
        }
        out.push_str(&title);
        out.push('\n');

        let prompts = match &entry.listing {
            PromptListing::Prompts(prompts) => prompts,
            PromptListing::Unavailable(message) => {
                out.push_str(&format!(
                    "  {} {}\n",
                    Icon::Error.colored(supports_color, supports_unicode),
                    ColoredText::error(message.as_str()).render(supports_color)
                ));
                continue;
            }
        };

        if prompts.is_empty() {
            out.push_str(&format!("  {}\n", ColoredText::dim("(no prompts)").render(supports_color)));
            continue;
        }

        for prompt in prompts {
            let mut line = format!("  {}", prompt.name);
            if let Some(version) = &prompt.version {
                line.push_str(&format!(" v{}", version));
            }
            if let Some(description) = &prompt.description {
                line.push_str(&format!(
                    " {}",
                    ColoredText::dim(format!("- {}", description)).render(supports_color)
                ));
            }
            out.push_str(&line);
            out.push('\n');
            out.push_str(&format!("    editors: {}\n", prompt.editors.join(", ")));
            if verbose && !prompt.files.is_empty() {
                out.push_str(&format!("    files: {}\n", prompt.files.join(", ")));
            }
        }
    }
    out
}
