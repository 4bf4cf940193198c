//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::colour::parse_colour;
use super::env::apply_env_overrides;
use super::init::config_root_dir;
use super::sources::read_config_text_with_sources;
use super::types::FileConfig;
use super::{Config, DisplayConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

/// Loader with injectable file, environment and config-root lookups.
pub fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    debug!(source = ?source, "loading config");
    let parsed: FileConfig = toml::from_str(&text)?;
    let mut config = resolve(parsed)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}

fn resolve(file: FileConfig) -> Result<Config, ConfigError> {
    let defaults = DisplayConfig::default();
    let raw = file.display;
    let colour = |value: Option<String>, fallback| match value {
        Some(name) => parse_colour(&name),
        None => Ok(fallback),
    };

    Ok(Config {
        session: file.session,
        display: DisplayConfig {
            color: raw.color,
            prompt: raw.prompt.unwrap_or(defaults.prompt),
            title_decoration: raw.title_decoration.unwrap_or(defaults.title_decoration),
            title_colour: colour(raw.title_colour, defaults.title_colour)?,
            prompt_colour: colour(raw.prompt_colour, defaults.prompt_colour)?,
            decoration_colour: colour(raw.decoration_colour, defaults.decoration_colour)?,
        },
    })
}
