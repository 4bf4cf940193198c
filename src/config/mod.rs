//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`MENUKIT_STATISTICS`, `MENUKIT_NO_COLOR`,
//!    `NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./menukit.toml in the current directory
//! 4. $XDG_CONFIG_HOME/menukit/menukit.toml (or the platform config dir)
//! 5. Built-in defaults

mod colour;
mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use colour::parse_colour;
pub use init::{config_root_dir, default_global_config_path, initialize_default_global_config};
pub use loader::{load_config, load_config_from_sources};
pub use types::{Config, DisplayConfig, GlobalConfigInitResult, SessionSettings};
