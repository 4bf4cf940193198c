//! menukit: nested interactive console menus.
//!
//! A [`Session`](session::Session) owns a stack of [`Menu`](menu::Menu)s.
//! Each menu prints a decorated title and its command list, then reads a
//! line, runs the matching command, and repeats until `exit` closes it.
//! Commands may open child menus (a blocking push) and use the session's
//! console helpers to prompt for input; pressing Escape cancels a prompt.
//!
//! # Quick start
//!
//! ```no_run
//! use menukit::config::Config;
//! use menukit::menu::Menu;
//! use menukit::session::Session;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let mut session = Session::terminal(&config);
//! let root = Menu::new("Main", &config.theme()).with_command("greet", "Say hello", |s| {
//!     s.write_line("hello")?;
//!     Ok(())
//! })?;
//! session.start(root)?;
//! # Ok(())
//! # }
//! ```

pub mod build_info;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod session;
#[cfg(test)]
pub mod testsupport;
pub mod tui;

pub use console::{Console, MemoryConsole, TerminalConsole};
pub use error::{ActionError, ConfigError, InputCancelled, SessionError};
pub use menu::{Command, CommandResult, CommandStatus, Menu, MenuFactory, MenuId, MenuTheme};
pub use session::{Session, SessionEvent};
pub use tui::ReadOutcome;
