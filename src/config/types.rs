//! Configuration data model.
//!
//! `FileConfig` mirrors the TOML layout with colours as strings; `Config`
//! is the resolved form handed to the session.

use crossterm::style::Color;
use serde::Deserialize;

use crate::menu::MenuTheme;
use crate::tui::settings;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub session: SessionSettings,
    pub display: DisplayConfig,
}

impl Config {
    /// Menu defaults derived from the display section.
    pub fn theme(&self) -> MenuTheme {
        self.display.theme()
    }
}

/// Session behaviour toggles.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionSettings {
    /// Print a result banner after every command.
    pub statistics: bool,
}

/// Resolved display preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub color: bool,
    pub prompt: String,
    pub title_decoration: String,
    pub title_colour: Color,
    pub prompt_colour: Color,
    pub decoration_colour: Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            prompt: settings::PROMPT_DEFAULT.to_string(),
            title_decoration: settings::TITLE_DECORATION_DEFAULT.to_string(),
            title_colour: settings::COLOR_TITLE,
            prompt_colour: settings::COLOR_PROMPT,
            decoration_colour: settings::COLOR_TITLE_DECORATION,
        }
    }
}

impl DisplayConfig {
    pub fn theme(&self) -> MenuTheme {
        MenuTheme {
            prompt: self.prompt.clone(),
            title_decoration: self.title_decoration.clone(),
            title_colour: self.title_colour,
            prompt_colour: self.prompt_colour,
            decoration_colour: self.decoration_colour,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub(super) session: SessionSettings,
    pub(super) display: FileDisplayConfig,
}

/// `[display]` as written on disk; unset keys keep their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileDisplayConfig {
    pub(super) color: bool,
    pub(super) prompt: Option<String>,
    pub(super) title_decoration: Option<String>,
    #[serde(alias = "title_color")]
    pub(super) title_colour: Option<String>,
    #[serde(alias = "prompt_color")]
    pub(super) prompt_colour: Option<String>,
    #[serde(alias = "decoration_color")]
    pub(super) decoration_colour: Option<String>,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            prompt: None,
            title_decoration: None,
            title_colour: None,
            prompt_colour: None,
            decoration_colour: None,
        }
    }
}

/// Result of `menukit --init-config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created { path: std::path::PathBuf },
    AlreadyInitialized { path: std::path::PathBuf },
}
