use anyhow::Result;

use tprompts::application::{ListUseCase, PromptListing};

use super::Context;
use crate::ui::json;
use crate::ui::views::list::render_prompt_listing;

pub fn cmd_list(ctx: &Context, repository: Option<&str>, verbose: bool) -> Result<()> {
    let use_case = ListUseCase::new(&ctx.registry, &ctx.git, ctx.repositories_dir());
    let listing = use_case.execute(repository)?;

    if ctx.json() {
        let repositories: Vec<_> = listing
            .iter()
            .map(|entry| {
                let (prompts, error): (Vec<serde_json::Value>, Option<String>) = match &entry.listing {
                    PromptListing::Prompts(prompts) => (
                        prompts
                            .iter()
                            .map(|p| {
                                serde_json::json!({
                                    "name": p.name,
                                    "description": p.description,
                                    "version": p.version,
                                    "editors": p.editors,
                                    "files": p.files,
                                })
                            })
                            .collect(),
                        None,
                    ),
                    PromptListing::Unavailable(message) => (Vec::new(), Some(message.clone())),
                };
                serde_json::json!({
                    "repository": entry.repository.name,
                    "default": entry.is_default,
                    "prompts": prompts,
                    "error": error,
                })
            })
            .collect();
        json::emit(serde_json::json!({
            "event": "list",
            "repositories": repositories,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_prompt_listing(&listing, verbose, ctx.ui.color, ctx.ui.unicode)
    );
    Ok(())
}
