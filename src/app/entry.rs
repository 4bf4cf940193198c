//! Application entry orchestration for the menukit CLI.

use crate::app::demo;
use crate::cli::Args;
use menukit::config::{initialize_default_global_config, load_config, Config, GlobalConfigInitResult};
use menukit::session::{Session, SessionEvent};
use tracing::{debug, error};

/// Run the CLI and return the process exit code.
pub(crate) fn run(args: Args) -> i32 {
    if args.init_config {
        return match run_init_flow() {
            Ok(()) => 0,
            Err(msg) => {
                eprintln!("error: {msg}");
                1
            }
        };
    }

    let config = match load_config_with_overrides(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            return 1;
        }
    };

    let mut session = Session::terminal(&config);
    session.on_event(|event| match event {
        SessionEvent::Stopped => debug!("demo session stopped"),
        other => debug!(event = ?other, "session event"),
    });

    let root = match demo::root_menu(&config.theme()) {
        Ok(menu) => menu,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    match session.start(root) {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, "session ended with an error");
            eprintln!("error: {e}");
            1
        }
    }
}

fn load_config_with_overrides(args: &Args) -> Result<Config, String> {
    let mut config = load_config(args.config.as_deref()).map_err(|e| e.to_string())?;
    if args.stats {
        config.session.statistics = true;
    }
    if args.no_color {
        config.display.color = false;
    }
    Ok(config)
}

fn run_init_flow() -> Result<(), String> {
    match initialize_default_global_config()
        .map_err(|e| format!("failed to write the default config: {e}"))?
    {
        GlobalConfigInitResult::Created { path } => {
            println!("wrote default config to {}", path.display());
            Ok(())
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => Err(format!(
            "a config already exists at {}; edit it or remove it first",
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_flags_override_loaded_config() {
        let dir = std::env::temp_dir().join(format!("menukit-entry-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cfg.toml");
        std::fs::write(&path, "[session]\nstatistics = false\n[display]\ncolor = true\n").unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let args = Args::parse_from(["menukit", "--config", &path_arg, "--stats", "--no-color"]);
        let config = load_config_with_overrides(&args).unwrap();
        assert!(config.session.statistics);
        assert!(!config.display.color);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_explicit_config_is_reported() {
        let args = Args::parse_from(["menukit", "--config", "/definitely/not/here.toml"]);
        let err = load_config_with_overrides(&args).unwrap_err();
        assert!(err.starts_with("io:"), "{err}");
    }
}
