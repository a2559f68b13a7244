//! Prompt identifier value object
//!
//! Accepted shapes:
//! - `prompt` - resolved against the default repository
//! - `repo/prompt/sub/path` - a registered repository
//! - `scheme://host/user/repo[/tree/<ref>]/prompt/sub/path` - ad-hoc remote

use crate::error::{TpromptsError, TpromptsResult};

/// Path segments that precede a branch/tag in hosted repository URLs
const REF_MARKERS: [&str; 2] = ["tree", "blob"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifier {
    /// `None` means "use the default repository"
    pub repository_name: Option<String>,
    /// Prompt directory relative to the repository root
    pub prompt_path: String,
    pub is_url: bool,
    pub original_url: Option<String>,
    /// Branch or tag embedded in a URL (`/tree/<ref>/`)
    pub reference: Option<String>,
}

impl ParsedIdentifier {
    pub fn parse(identifier: &str) -> TpromptsResult<Self> {
        if identifier.trim().is_empty() {
            return Err(invalid(identifier, "identifier is empty"));
        }

        if let Some((scheme, rest)) = identifier.split_once("://") {
            if is_scheme(scheme) {
                return parse_url(identifier, rest);
            }
            return Err(invalid(identifier, "unrecognised URL scheme"));
        }

        match identifier.split_once('/') {
            Some((repository, prompt)) => {
                if repository.is_empty() {
                    return Err(invalid(identifier, "repository name is empty"));
                }
                let prompt = prompt.trim_end_matches('/');
                let prompt_path = validate_prompt_path(identifier, prompt)?;
                Ok(Self {
                    repository_name: Some(repository.to_string()),
                    prompt_path,
                    is_url: false,
                    original_url: None,
                    reference: None,
                })
            }
            None => Ok(Self {
                repository_name: None,
                prompt_path: validate_prompt_path(identifier, identifier)?,
                is_url: false,
                original_url: None,
                reference: None,
            }),
        }
    }

    /// `repo/prompt` form for display
    pub fn display_name(&self) -> String {
        match &self.repository_name {
            Some(repo) => format!("{}/{}", repo, self.prompt_path),
            None => self.prompt_path.clone(),
        }
    }
}

fn parse_url(identifier: &str, after_scheme: &str) -> TpromptsResult<ParsedIdentifier> {
    let path = after_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or(after_scheme);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    // host, user, repo, then at least one prompt segment
    if segments.len() < 4 {
        return Err(invalid(
            identifier,
            "URL must contain host, user, repository and prompt path",
        ));
    }

    let repository = segments[2].trim_end_matches(".git");
    if repository.is_empty() {
        return Err(invalid(identifier, "repository name is empty"));
    }

    let mut index = 3;
    // GitLab separates repository routes with a lone `-` segment
    if segments.get(index) == Some(&"-") {
        index += 1;
    }
    let mut reference = None;
    if let Some(marker) = segments.get(index) {
        if REF_MARKERS.contains(marker) && index + 1 < segments.len() {
            reference = Some(segments[index + 1].to_string());
            index += 2;
        }
    }

    let prompt = segments[index.min(segments.len())..].join("/");
    let prompt_path = validate_prompt_path(identifier, &prompt)?;

    Ok(ParsedIdentifier {
        repository_name: Some(repository.to_string()),
        prompt_path,
        is_url: true,
        original_url: Some(identifier.to_string()),
        reference,
    })
}

fn validate_prompt_path(identifier: &str, prompt: &str) -> TpromptsResult<String> {
    if prompt.is_empty() {
        return Err(invalid(identifier, "prompt path is empty"));
    }
    if prompt.split('/').any(|segment| segment == "..") {
        return Err(invalid(identifier, "prompt path must not contain '..'"));
    }
    Ok(prompt.to_string())
}

fn is_scheme(scheme: &str) -> bool {
    !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn invalid(identifier: &str, reason: &str) -> TpromptsError {
    TpromptsError::InvalidIdentifier {
        identifier: identifier.to_string(),
        reason: reason.to_string(),
    }
}
