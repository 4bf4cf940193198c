//! CLI argument parsing via clap.

use clap::Parser;
use menukit::build_info::{HELP_BUILD_METADATA, LONG_VERSION};

/// Nested console menus with commands, prompts and a result banner.
#[derive(Debug, Parser)]
#[command(
    name = "menukit",
    version,
    long_version = LONG_VERSION,
    after_help = HELP_BUILD_METADATA
)]
pub struct Args {
    /// Path to config file (default: ./menukit.toml or ~/.config/menukit/menukit.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Print a "Command finished" banner after every command.
    #[arg(short = 's', long = "stats")]
    pub stats: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Write the default config to the per-user config directory and exit.
    #[arg(long = "init-config", conflicts_with = "config")]
    pub init_config: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};
    use menukit::build_info::{GIT_COMMIT, VERSION};

    #[test]
    fn defaults_leave_everything_off() {
        let args = Args::parse_from(["menukit"]);
        assert!(args.config.is_none());
        assert!(!args.stats);
        assert!(!args.no_color);
        assert!(!args.init_config);
    }

    #[test]
    fn short_and_long_flags_parse() {
        let args = Args::parse_from(["menukit", "-c", "demo.toml", "-s", "--no-color"]);
        assert_eq!(args.config.as_deref(), Some("demo.toml"));
        assert!(args.stats);
        assert!(args.no_color);
    }

    #[test]
    fn init_config_conflicts_with_explicit_config() {
        let err = Args::try_parse_from(["menukit", "--init-config", "--config", "x.toml"]);
        assert!(err.is_err());
    }

    #[test]
    fn long_version_flag_prints_build_metadata() {
        let long = Args::command().get_long_version().map(str::to_string);
        let long = long.expect("long version is set");
        assert!(long.starts_with(VERSION));
        assert!(long.contains(&format!("commit: {GIT_COMMIT}")));

        let err = Args::try_parse_from(["menukit", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.to_string().contains("commit: "));
    }
}
