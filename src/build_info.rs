//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("MENUKIT_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("MENUKIT_BUILD_TIMESTAMP");

/// Help trailer that surfaces build metadata in `menukit --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("MENUKIT_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("MENUKIT_BUILD_TIMESTAMP")
);

/// The `menukit --version` block.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("MENUKIT_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("MENUKIT_BUILD_TIMESTAMP")
);

/// One-line version shown under the demo's root title.
pub fn startup_metadata_line() -> String {
    format!("menukit v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}
