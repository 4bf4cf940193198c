//! CLI entry point for menukit.

mod app;
mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log filter variable; defaults to `warn` so logs stay out of the menus.
const LOG_ENV: &str = "MENUKIT_LOG";

fn main() {
    init_tracing();
    let args = cli::Args::parse();
    std::process::exit(app::entry::run(args));
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
