//! Named zero-argument commands and their recorded outcomes.

use crate::error::ActionError;
use crate::session::Session;
use std::fmt;
use std::time::{Duration, Instant};

type Action = Box<dyn Fn(&mut Session) -> Result<(), ActionError>>;

/// A named, described operation registered on one menu.
pub struct Command {
    name: String,
    description: String,
    action: Action,
}

/// Outcome class of one execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
    Cancelled,
}

/// Timing and outcome of one `Command::execute` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    started_at: Instant,
    finished_at: Instant,
    status: CommandStatus,
    error: Option<String>,
}

/// A failed execution: the recorded result plus the error to propagate.
#[derive(Debug)]
pub struct CommandFailure {
    pub result: CommandResult,
    pub error: ActionError,
}

impl Command {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut Session) -> Result<(), ActionError> + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the action synchronously and record how it went.
    ///
    /// Cancellation is absorbed into a `Cancelled` result. Any other error
    /// comes back as `Err` carrying both the `Failure` result and the error,
    /// so the caller can report before propagating.
    pub fn execute(&self, session: &mut Session) -> Result<CommandResult, CommandFailure> {
        let started_at = Instant::now();
        let outcome = (self.action)(session);
        let finished_at = Instant::now();

        match outcome {
            Ok(()) => Ok(CommandResult {
                started_at,
                finished_at,
                status: CommandStatus::Success,
                error: None,
            }),
            Err(ActionError::Cancelled) => Ok(CommandResult {
                started_at,
                finished_at,
                status: CommandStatus::Cancelled,
                error: Some(ActionError::Cancelled.to_string()),
            }),
            Err(error) => Err(CommandFailure {
                result: CommandResult {
                    started_at,
                    finished_at,
                    status: CommandStatus::Failure,
                    error: Some(error.to_string()),
                },
                error,
            }),
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl CommandResult {
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn finished_at(&self) -> Instant {
        self.finished_at
    }

    pub fn duration(&self) -> Duration {
        self.finished_at.saturating_duration_since(self.started_at)
    }

    pub fn status(&self) -> CommandStatus {
        self.status
    }

    /// Message captured for non-successful runs.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }
}
