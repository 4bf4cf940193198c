//! Abstract terminal device consumed by the line editor and the session.
//!
//! `Console` is the only seam between menu logic and real terminal I/O.
//! `TerminalConsole` drives a crossterm terminal; `MemoryConsole` replays a
//! scripted key stream against an in-memory screen so sessions can be tested
//! (or embedded) without a TTY.

mod memory;
mod terminal;

pub use memory::MemoryConsole;
pub use terminal::TerminalConsole;

use crossterm::event::KeyEvent;
use crossterm::style::Color;
use std::io;
use std::ops::{Deref, DerefMut};

/// Capability set the core needs from a terminal.
pub trait Console {
    /// Write text with optional colours (`None` keeps the terminal default).
    fn write_styled(
        &mut self,
        text: &str,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> io::Result<()>;

    /// Block until one key press is available.
    fn read_key(&mut self) -> io::Result<KeyEvent>;

    /// Current cursor position as `(column, row)`.
    fn cursor_position(&mut self) -> io::Result<(u16, u16)>;

    fn set_cursor_position(&mut self, column: u16, row: u16) -> io::Result<()>;

    /// Visible buffer size as `(columns, rows)`.
    fn buffer_size(&self) -> io::Result<(u16, u16)>;

    /// Whether Ctrl-C is currently delivered as a key instead of a signal.
    fn treats_ctrl_c_as_input(&self) -> bool;

    fn set_treat_ctrl_c_as_input(&mut self, enabled: bool) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.write_styled(text, None, None)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write_styled(text, None, None)?;
        self.write_styled("\n", None, None)
    }

    fn write_coloured(&mut self, text: &str, foreground: Color) -> io::Result<()> {
        self.write_styled(text, Some(foreground), None)
    }

    /// Move the cursor `count` cells backwards, wrapping to previous rows.
    fn retreat_cursor(&mut self, count: usize) -> io::Result<()> {
        if count == 0 {
            return Ok(());
        }
        let (column, row) = self.cursor_position()?;
        let width = usize::from(self.buffer_size()?.0.max(1));
        let linear = (usize::from(row) * width + usize::from(column)).saturating_sub(count);
        let column = (linear % width) as u16;
        let row = (linear / width) as u16;
        self.set_cursor_position(column, row)
    }
}

/// Ctrl-C interception lifetime guard.
///
/// Enables "Ctrl-C as input" on acquire and restores the previous setting on
/// drop, so every return path (including `?`) leaves the terminal as found.
pub(crate) struct CtrlCGuard<'a> {
    console: &'a mut dyn Console,
    previous: bool,
}

impl<'a> CtrlCGuard<'a> {
    pub(crate) fn acquire(console: &'a mut dyn Console) -> io::Result<Self> {
        let previous = console.treats_ctrl_c_as_input();
        console.set_treat_ctrl_c_as_input(true)?;
        Ok(Self { console, previous })
    }
}

impl<'a> Deref for CtrlCGuard<'a> {
    type Target = dyn Console + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.console
    }
}

impl DerefMut for CtrlCGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.console
    }
}

impl Drop for CtrlCGuard<'_> {
    fn drop(&mut self) {
        let _ = self.console.set_treat_ctrl_c_as_input(self.previous);
    }
}
