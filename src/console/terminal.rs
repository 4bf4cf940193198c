//! crossterm-backed console writing to stdout.

use super::Console;
use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal;
use crossterm::QueueableCommand;
use std::io::{self, Stdout, Write};

/// Real terminal device.
///
/// Ctrl-C interception maps onto crossterm raw mode: while raw, Ctrl-C is
/// delivered as a key event and `\n` must be written as `\r\n`.
pub struct TerminalConsole {
    stdout: Stdout,
    color: bool,
    raw: bool,
}

impl TerminalConsole {
    pub fn new(color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            color,
            raw: terminal::is_raw_mode_enabled().unwrap_or(false),
        }
    }

    fn print_text(&mut self, text: &str) -> io::Result<()> {
        if self.raw && text.contains('\n') {
            let translated = text.replace("\r\n", "\n").replace('\n', "\r\n");
            self.stdout.queue(Print(translated))?;
        } else {
            self.stdout.queue(Print(text))?;
        }
        Ok(())
    }
}

impl Console for TerminalConsole {
    fn write_styled(
        &mut self,
        text: &str,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> io::Result<()> {
        let styled = self.color && (foreground.is_some() || background.is_some());
        if styled {
            if let Some(fg) = foreground {
                self.stdout.queue(SetForegroundColor(fg))?;
            }
            if let Some(bg) = background {
                self.stdout.queue(SetBackgroundColor(bg))?;
            }
        }
        self.print_text(text)?;
        if styled {
            self.stdout.queue(ResetColor)?;
        }
        self.stdout.flush()
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                return Ok(key);
            }
        }
    }

    fn cursor_position(&mut self) -> io::Result<(u16, u16)> {
        self.stdout.flush()?;
        cursor::position()
    }

    fn set_cursor_position(&mut self, column: u16, row: u16) -> io::Result<()> {
        self.stdout.queue(MoveTo(column, row))?;
        self.stdout.flush()
    }

    fn buffer_size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn treats_ctrl_c_as_input(&self) -> bool {
        self.raw
    }

    fn set_treat_ctrl_c_as_input(&mut self, enabled: bool) -> io::Result<()> {
        if enabled == self.raw {
            return Ok(());
        }
        if enabled {
            terminal::enable_raw_mode()?;
        } else {
            terminal::disable_raw_mode()?;
        }
        self.raw = enabled;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}
