//! In-memory console with a scripted key stream and a simple screen model.

use super::Console;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

const DEFAULT_COLUMNS: u16 = 80;
const DEFAULT_ROWS: u16 = 25;

/// One `write_styled` call as it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

#[derive(Debug)]
struct Inner {
    keys: VecDeque<KeyEvent>,
    columns: u16,
    rows: u16,
    screen: Vec<Vec<char>>,
    column: u16,
    row: u16,
    transcript: String,
    segments: Vec<Segment>,
    ctrl_c_as_input: bool,
    interception_changes: Vec<bool>,
}

/// Scripted console for tests and headless embedding.
///
/// The handle is cheap to clone; all clones share the same state, so a test
/// can hand one clone to a [`Session`](crate::session::Session) and inspect
/// the other afterwards. Reading past the end of the script fails with
/// `io::ErrorKind::UnexpectedEof`.
#[derive(Debug, Clone)]
pub struct MemoryConsole {
    inner: Rc<RefCell<Inner>>,
}

impl Default for MemoryConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }

    pub fn with_size(columns: u16, rows: u16) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                keys: VecDeque::new(),
                columns: columns.max(1),
                rows: rows.max(1),
                screen: Vec::new(),
                column: 0,
                row: 0,
                transcript: String::new(),
                segments: Vec::new(),
                ctrl_c_as_input: false,
                interception_changes: Vec::new(),
            })),
        }
    }

    /// Console pre-loaded with `script` (see [`MemoryConsole::type_text`]).
    pub fn with_input(script: &str) -> Self {
        let console = Self::new();
        console.type_text(script);
        console
    }

    /// Queue keys for each char: `\n` is Enter, `\x1b` Escape, `\x08` or
    /// `\x7f` Backspace, anything else a plain character key.
    pub fn type_text(&self, script: &str) {
        for ch in script.chars() {
            let code = match ch {
                '\n' => KeyCode::Enter,
                '\x1b' => KeyCode::Esc,
                '\x08' | '\x7f' => KeyCode::Backspace,
                other => KeyCode::Char(other),
            };
            self.press(code);
        }
    }

    pub fn press(&self, code: KeyCode) {
        self.push_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn push_event(&self, event: KeyEvent) {
        self.inner.borrow_mut().keys.push_back(event);
    }

    pub fn pending_keys(&self) -> usize {
        self.inner.borrow().keys.len()
    }

    /// Everything written so far, in order, without cursor effects.
    pub fn transcript(&self) -> String {
        self.inner.borrow().transcript.clone()
    }

    pub fn segments(&self) -> Vec<Segment> {
        self.inner.borrow().segments.clone()
    }

    /// Rendered content of one screen row with trailing blanks trimmed.
    pub fn screen_line(&self, row: u16) -> String {
        let inner = self.inner.borrow();
        inner
            .screen
            .get(usize::from(row))
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    pub fn screen_lines(&self) -> Vec<String> {
        let count = self.inner.borrow().screen.len();
        (0..count).map(|row| self.screen_line(row as u16)).collect()
    }

    /// Every value passed to `set_treat_ctrl_c_as_input`, in order.
    pub fn interception_changes(&self) -> Vec<bool> {
        self.inner.borrow().interception_changes.clone()
    }
}

impl Inner {
    fn put(&mut self, ch: char) {
        match ch {
            '\n' => {
                self.column = 0;
                self.row = self.row.saturating_add(1);
            }
            '\r' => self.column = 0,
            _ => {
                if self.column >= self.columns {
                    self.column = 0;
                    self.row = self.row.saturating_add(1);
                }
                let row = usize::from(self.row);
                let column = usize::from(self.column);
                if self.screen.len() <= row {
                    self.screen.resize_with(row + 1, Vec::new);
                }
                let cells = &mut self.screen[row];
                if cells.len() <= column {
                    cells.resize(column + 1, ' ');
                }
                cells[column] = ch;
                self.column += 1;
            }
        }
    }
}

impl Console for MemoryConsole {
    fn write_styled(
        &mut self,
        text: &str,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.transcript.push_str(text);
        inner.segments.push(Segment {
            text: text.to_string(),
            foreground,
            background,
        });
        for ch in text.chars() {
            inner.put(ch);
        }
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        self.inner.borrow_mut().keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }

    fn cursor_position(&mut self) -> io::Result<(u16, u16)> {
        let inner = self.inner.borrow();
        Ok((inner.column, inner.row))
    }

    fn set_cursor_position(&mut self, column: u16, row: u16) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.column = column.min(inner.columns);
        inner.row = row;
        Ok(())
    }

    fn buffer_size(&self) -> io::Result<(u16, u16)> {
        let inner = self.inner.borrow();
        Ok((inner.columns, inner.rows))
    }

    fn treats_ctrl_c_as_input(&self) -> bool {
        self.inner.borrow().ctrl_c_as_input
    }

    fn set_treat_ctrl_c_as_input(&mut self, enabled: bool) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.ctrl_c_as_input = enabled;
        inner.interception_changes.push(enabled);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
