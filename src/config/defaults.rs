//! Default configuration constants.

/// Embedded default `menukit.toml` written by `menukit --init-config`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/menukit.toml");
/// Directory under the config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "menukit";
/// File name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "menukit.toml";

pub(super) const ENV_STATISTICS: &str = "MENUKIT_STATISTICS";
pub(super) const ENV_NO_COLOR: &str = "MENUKIT_NO_COLOR";
/// Cross-tool convention: any non-empty value disables colour.
pub(super) const ENV_NO_COLOR_STANDARD: &str = "NO_COLOR";
