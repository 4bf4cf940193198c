//! Unified error types for the session toolkit.

use crate::menu::MenuId;
use std::fmt;

// ---------------------------------------------------------------------------
// InputCancelled
// ---------------------------------------------------------------------------

/// The user pressed Escape while a line was being edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputCancelled;

impl fmt::Display for InputCancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input cancelled")
    }
}

impl std::error::Error for InputCancelled {}

// ---------------------------------------------------------------------------
// ActionError
// ---------------------------------------------------------------------------

/// Errors a command action may return.
#[derive(Debug)]
pub enum ActionError {
    /// A nested read was cancelled; recorded as a cancelled command.
    Cancelled,
    /// The action failed with a message of its own.
    Failed(String),
    Io(std::io::Error),
    /// A session operation inside the action failed (e.g. a nested menu).
    Session(Box<SessionError>),
}

impl ActionError {
    /// Convenience constructor for ad-hoc failures.
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }

    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "{InputCancelled}"),
            Self::Failed(msg) => write!(f, "{msg}"),
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Session(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Session(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<InputCancelled> for ActionError {
    fn from(_: InputCancelled) -> Self {
        Self::Cancelled
    }
}

impl From<std::io::Error> for ActionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<SessionError> for ActionError {
    fn from(e: SessionError) -> Self {
        Self::Session(Box::new(e))
    }
}

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

/// Errors raised by the menu stack and the session loop.
#[derive(Debug)]
pub enum SessionError {
    Io(std::io::Error),
    /// A menu id that is not registered was looked up.
    UnknownMenu(MenuId),
    /// An operation needed an active menu but none is open.
    NoActiveMenu,
    /// `start` was called while a root menu is still open.
    AlreadyRunning,
    /// A command name was registered twice on the same menu.
    DuplicateCommand { menu: MenuId, name: String },
    /// A command action failed; the session loop stops with this error.
    CommandFailed { command: String, source: ActionError },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::UnknownMenu(id) => write!(f, "no open menu with id {id}"),
            Self::NoActiveMenu => write!(f, "no menu is active"),
            Self::AlreadyRunning => write!(f, "a session is already running"),
            Self::DuplicateCommand { menu, name } => {
                write!(f, "menu {menu} already has a command named `{name}`")
            }
            Self::CommandFailed { command, source } => {
                write!(f, "command `{command}` failed: {source}")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::CommandFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
