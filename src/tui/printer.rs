//! Menu header, command listing, and command-result banner rendering.

use crate::console::Console;
use crate::menu::{Command, CommandResult, CommandStatus, Menu};
use crate::tui::settings;
use crate::tui::text::{pad_right, reversed, visible_width};
use crossterm::style::Color;
use std::io;
use std::rc::Rc;
use std::time::Duration;

/// Title framed by the decoration, then the command list.
pub fn print_menu_header(console: &mut dyn Console, menu: &Menu) -> io::Result<()> {
    print_title(
        console,
        menu.title(),
        menu.title_decoration(),
        menu.title_colour(),
        menu.decoration_colour(),
    )?;
    print_command_list(console, menu.commands())
}

pub fn print_title(
    console: &mut dyn Console,
    title: &str,
    decoration: &str,
    title_colour: Color,
    decoration_colour: Color,
) -> io::Result<()> {
    console.write_coloured(decoration, decoration_colour)?;
    console.write_coloured(title, title_colour)?;
    console.write_coloured(&reversed(decoration), decoration_colour)?;
    console.write("\n")
}

pub fn print_command_list(console: &mut dyn Console, commands: &[Rc<Command>]) -> io::Result<()> {
    let width = command_column_width(commands.iter().map(|c| c.name()));
    for command in commands {
        console.write_line(&format!(
            "{} {}",
            pad_right(command.name(), width),
            command.description()
        ))?;
    }
    Ok(())
}

/// Widest command name plus the fixed gutter.
pub fn command_column_width<'a>(names: impl IntoIterator<Item = &'a str>) -> usize {
    names.into_iter().map(visible_width).max().unwrap_or(0) + settings::COMMAND_COLUMN_GUTTER
}

pub fn print_unknown_command(console: &mut dyn Console) -> io::Result<()> {
    console.write_coloured(settings::LABEL_UNKNOWN_COMMAND, settings::COLOR_WARNING)?;
    console.write("\n")
}

/// `Command finished: <label> in <duration>`, plus the error line on failure.
pub fn print_command_result(console: &mut dyn Console, result: &CommandResult) -> io::Result<()> {
    let (label, colour) = status_label(result.status());
    console.write("\n")?;
    console.write(settings::LABEL_COMMAND_FINISHED)?;
    console.write_coloured(label, colour)?;
    console.write_line(&format!(" in {}", human_duration(result.duration())))?;

    if result.status() == CommandStatus::Failure {
        if let Some(message) = result.error() {
            console.write_coloured(
                &format!("{}{message}", settings::LABEL_ERROR_MESSAGE),
                settings::COLOR_ERROR,
            )?;
            console.write("\n")?;
        }
    }
    Ok(())
}

pub fn status_label(status: CommandStatus) -> (&'static str, Color) {
    match status {
        CommandStatus::Success => (settings::LABEL_SUCCESS, settings::COLOR_RESULT_SUCCESS),
        CommandStatus::Failure => (settings::LABEL_FAILED, settings::COLOR_RESULT_FAILED),
        CommandStatus::Cancelled => (settings::LABEL_CANCELLED, settings::COLOR_RESULT_CANCELLED),
    }
}

/// Seconds with two decimals under a minute, minutes with two decimals after.
pub fn human_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 60.0 {
        format!("{secs:.2}s")
    } else {
        format!("{:.2}m", secs / 60.0)
    }
}
