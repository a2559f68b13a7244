//! Interactive prompts (dialoguer)

use anyhow::Result;
use dialoguer::{Confirm, Select};

use tprompts::Editor;

/// Yes/no question defaulting to "no"
pub fn confirm(question: impl Into<String>) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(question.into())
        .default(false)
        .interact()?)
}

/// Let the user pick one of `editors`; `None` when cancelled
pub fn select_editor(editors: &[Editor]) -> Result<Option<Editor>> {
    let items: Vec<&str> = editors.iter().map(|e| e.display_name()).collect();
    let choice = Select::new()
        .with_prompt("Select an editor")
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(choice.and_then(|i| editors.get(i).copied()))
}
