use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Default,
    Install,
    Remove,
    Repo,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Default) => theme::icons::DEFAULT,
            (true, Icon::Install) => theme::icons::INSTALL,
            (true, Icon::Remove) => theme::icons::REMOVE,
            (true, Icon::Repo) => theme::icons::REPO,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Default) => theme::icons_ascii::DEFAULT,
            (false, Icon::Install) => theme::icons_ascii::INSTALL,
            (false, Icon::Remove) => theme::icons_ascii::REMOVE,
            (false, Icon::Repo) => theme::icons_ascii::REPO,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Remove | Icon::Default => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Install | Icon::Repo => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
