//! Raw-keystroke line editor.
//!
//! Every read runs with Ctrl-C interception switched off at the terminal
//! level (see [`CtrlCGuard`]) so Escape and Backspace reach the editor
//! instead of a line-buffered tty. Editing is append-only: the cursor always
//! sits at the end of the buffer.

use crate::console::{Console, CtrlCGuard};
use crate::error::InputCancelled;
use crate::tui::settings;
use crate::tui::text::visible_width;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use std::io;

/// Result of reading one interactive input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// User submitted a full line (possibly empty).
    Line(String),
    /// User pressed Escape; the visible input was erased.
    Cancelled,
}

impl ReadOutcome {
    /// Turn the outcome into a `Result` so command actions can use `?`.
    pub fn completed(self) -> Result<String, InputCancelled> {
        match self {
            Self::Line(line) => Ok(line),
            Self::Cancelled => Err(InputCancelled),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Read one line, echoing accepted keys after `prompt`.
///
/// Every char is assumed to occupy one terminal cell, as in
/// [`visible_width`]. Backspace and Escape erase that many cells, so
/// double-width glyphs (CJK, most emoji) are only half erased on screen.
/// The returned buffer is always exact.
pub fn read_line(
    console: &mut dyn Console,
    prompt: &str,
    foreground: Option<Color>,
    background: Option<Color>,
) -> io::Result<ReadOutcome> {
    let mut console = CtrlCGuard::acquire(console)?;
    console.write_styled(prompt, foreground, background)?;

    let mut buffer = String::new();
    loop {
        let key = console.read_key()?;
        match key.code {
            KeyCode::Enter => {
                console.write("\n")?;
                return Ok(ReadOutcome::Line(buffer));
            }
            KeyCode::Esc => {
                erase_visible(&mut *console, visible_width(&buffer))?;
                return Ok(ReadOutcome::Cancelled);
            }
            KeyCode::Backspace => {
                if let Some(ch) = buffer.pop() {
                    let mut utf8 = [0u8; 4];
                    erase_visible(&mut *console, visible_width(ch.encode_utf8(&mut utf8)))?;
                }
            }
            KeyCode::Char(ch) if is_plain(&key) && is_accepted_char(ch) => {
                buffer.push(ch);
                let mut utf8 = [0u8; 4];
                console.write(ch.encode_utf8(&mut utf8))?;
            }
            _ => {}
        }
    }
}

/// Read a single key press with Ctrl-C interception disabled.
pub fn read_key(console: &mut dyn Console) -> io::Result<KeyEvent> {
    let mut console = CtrlCGuard::acquire(console)?;
    console.read_key()
}

/// Ask a yes/no question; Enter picks `default`.
pub fn read_permission(console: &mut dyn Console, prompt: &str, default: bool) -> io::Result<bool> {
    let mut console = CtrlCGuard::acquire(console)?;
    console.write(prompt)?;
    console.write(settings::permission_suffix(default))?;

    loop {
        let key = console.read_key()?;
        let decision = match key.code {
            KeyCode::Enter => Some(default),
            KeyCode::Char('y' | 'Y') if is_plain(&key) => Some(true),
            KeyCode::Char('n' | 'N') if is_plain(&key) => Some(false),
            KeyCode::Char(ch) if is_plain(&key) && is_accepted_char(ch) => {
                // Stray key: show it, then step back so the next key overwrites it.
                let mut utf8 = [0u8; 4];
                console.write(ch.encode_utf8(&mut utf8))?;
                console.retreat_cursor(1)?;
                None
            }
            _ => None,
        };
        if let Some(decision) = decision {
            if let KeyCode::Char(ch) = key.code {
                let mut utf8 = [0u8; 4];
                console.write(ch.encode_utf8(&mut utf8))?;
            }
            console.write("\n")?;
            return Ok(decision);
        }
    }
}

/// Letters, digits, symbols, punctuation, and whitespace.
fn is_accepted_char(ch: char) -> bool {
    ch.is_whitespace() || !ch.is_control()
}

/// Control/alt chords never insert text.
fn is_plain(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Step back `count` cells, blank them, and step back again.
fn erase_visible(console: &mut dyn Console, count: usize) -> io::Result<()> {
    if count == 0 {
        return Ok(());
    }
    console.retreat_cursor(count)?;
    console.write(&" ".repeat(count))?;
    console.retreat_cursor(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;

    fn read(console: &mut MemoryConsole, prompt: &str) -> ReadOutcome {
        read_line(console, prompt, None, None).unwrap()
    }

    #[test]
    fn returns_typed_line_on_enter() {
        let mut console = MemoryConsole::with_input("hello world\n");
        assert_eq!(read(&mut console, "> "), ReadOutcome::Line("hello world".into()));
        assert_eq!(console.screen_line(0), "> hello world");
        assert_eq!(console.cursor_position().unwrap(), (0, 1));
    }

    #[test]
    fn empty_enter_returns_empty_line() {
        let mut console = MemoryConsole::with_input("\n");
        assert_eq!(read(&mut console, "> "), ReadOutcome::Line(String::new()));
    }

    #[test]
    fn backspace_removes_last_char_from_buffer_and_screen() {
        let mut console = MemoryConsole::with_input("helo\x08lo\n");
        assert_eq!(read(&mut console, "> "), ReadOutcome::Line("hello".into()));
        assert_eq!(console.screen_line(0), "> hello");
    }

    #[test]
    fn backspace_over_accented_char_erases_one_cell() {
        let mut console = MemoryConsole::with_input("caf\u{e9}\x08e\n");
        assert_eq!(read(&mut console, "> "), ReadOutcome::Line("cafe".into()));
        assert_eq!(console.screen_line(0), "> cafe");
    }

    #[test]
    fn escape_after_multibyte_input_returns_to_the_prompt() {
        let mut console = MemoryConsole::with_input("n\u{e4}\u{ef}ve\x1b");
        assert_eq!(read(&mut console, "> "), ReadOutcome::Cancelled);
        assert_eq!(console.screen_line(0), ">");
        assert_eq!(console.cursor_position().unwrap(), (2, 0));
    }

    #[test]
    fn backspace_on_empty_buffer_is_a_no_op() {
        let mut console = MemoryConsole::with_input("\x08");
        console.type_text("\x08x\n");
        assert_eq!(read(&mut console, "> "), ReadOutcome::Line("x".into()));
        assert_eq!(console.screen_line(0), "> x");
    }

    #[test]
    fn backspace_on_empty_buffer_leaves_cursor_after_prompt() {
        let mut console = MemoryConsole::with_input("\x08");
        // Script runs dry right after the backspace.
        let err = read_line(&mut console, "> ", None, None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(console.cursor_position().unwrap(), (2, 0));
        assert_eq!(console.screen_line(0), ">");
    }

    #[test]
    fn escape_cancels_and_erases_visible_input() {
        let mut console = MemoryConsole::with_input("secret\x1b");
        assert_eq!(read(&mut console, "> "), ReadOutcome::Cancelled);
        assert_eq!(console.screen_line(0), ">");
        assert_eq!(console.cursor_position().unwrap(), (2, 0));
    }

    #[test]
    fn escape_on_empty_buffer_still_cancels() {
        let mut console = MemoryConsole::with_input("\x1b");
        assert!(read(&mut console, "").is_cancelled());
    }

    #[test]
    fn escape_erases_input_wrapped_across_rows() {
        let mut console = MemoryConsole::with_size(6, 4);
        console.type_text("abcdefgh\x1b");
        assert_eq!(read(&mut console, "> "), ReadOutcome::Cancelled);
        assert_eq!(console.screen_line(0), ">");
        assert_eq!(console.screen_line(1), "");
        assert_eq!(console.cursor_position().unwrap(), (2, 0));
    }

    #[test]
    fn navigation_and_function_keys_are_ignored() {
        let console = MemoryConsole::new();
        console.type_text("ab");
        console.press(KeyCode::Left);
        console.press(KeyCode::F(5));
        console.press(KeyCode::Tab);
        console.type_text("c\n");
        let mut console = console;
        assert_eq!(read(&mut console, "> "), ReadOutcome::Line("abc".into()));
    }

    #[test]
    fn control_chords_do_not_insert_text() {
        let console = MemoryConsole::new();
        console.push_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        console.type_text("ok\n");
        let mut console = console;
        assert_eq!(read(&mut console, "> "), ReadOutcome::Line("ok".into()));
    }

    #[test]
    fn interception_is_restored_after_submit_cancel_and_error() {
        for script in ["x\n", "x\x1b", "x"] {
            let mut console = MemoryConsole::with_input(script);
            let _ = read_line(&mut console, "> ", None, None);
            assert_eq!(console.interception_changes(), vec![true, false]);
            assert!(!console.treats_ctrl_c_as_input());
        }
    }

    #[test]
    fn prompt_uses_requested_colours() {
        let mut console = MemoryConsole::with_input("\n");
        read_line(&mut console, "$ ", Some(Color::Cyan), Some(Color::Black)).unwrap();
        let first = &console.segments()[0];
        assert_eq!(first.text, "$ ");
        assert_eq!(first.foreground, Some(Color::Cyan));
        assert_eq!(first.background, Some(Color::Black));
    }

    #[test]
    fn completed_maps_cancel_to_error() {
        assert_eq!(ReadOutcome::Line("a".into()).completed(), Ok("a".to_string()));
        assert_eq!(ReadOutcome::Cancelled.completed(), Err(InputCancelled));
    }

    #[test]
    fn read_key_returns_next_key_under_guard() {
        let mut console = MemoryConsole::with_input("q");
        let key = read_key(&mut console).unwrap();
        assert_eq!(key.code, KeyCode::Char('q'));
        assert_eq!(console.interception_changes(), vec![true, false]);
    }

    #[test]
    fn permission_accepts_y_and_n_case_insensitively() {
        let mut console = MemoryConsole::with_input("Y");
        assert!(read_permission(&mut console, "Proceed?", false).unwrap());
        let mut console = MemoryConsole::with_input("n");
        assert!(!read_permission(&mut console, "Proceed?", true).unwrap());
    }

    #[test]
    fn permission_enter_uses_default() {
        let mut console = MemoryConsole::with_input("\n");
        assert!(read_permission(&mut console, "Proceed?", true).unwrap());
        assert_eq!(console.screen_line(0), "Proceed? (Y/n)");
        let mut console = MemoryConsole::with_input("\n");
        assert!(!read_permission(&mut console, "Proceed?", false).unwrap());
        assert_eq!(console.screen_line(0), "Proceed? (y/N)");
    }

    #[test]
    fn permission_stray_keys_do_not_corrupt_prompt() {
        let mut console = MemoryConsole::with_input("xq\x1by");
        assert!(read_permission(&mut console, "Go?", false).unwrap());
        assert_eq!(console.screen_line(0), "Go? (y/N) y");
    }

    #[cfg(feature = "fuzz-tests")]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Expected buffer after replaying chars, with `\x08` as backspace.
        fn expected(script: &str) -> String {
            let mut out = String::new();
            for ch in script.chars() {
                if ch == '\x08' {
                    out.pop();
                } else {
                    out.push(ch);
                }
            }
            out
        }

        proptest! {
            #[test]
            fn editor_is_a_faithful_buffer(
                script in proptest::string::string_regex("[ -~\u{08}é]{0,40}").expect("regex")
            ) {
                let mut console = MemoryConsole::with_input(&script);
                console.type_text("\n");
                let outcome = read_line(&mut console, "> ", None, None).unwrap();
                let expected_line = expected(&script);
                prop_assert_eq!(&outcome, &ReadOutcome::Line(expected_line.clone()));
                let shown = console.screen_line(0);
                let expected_shown = format!("> {expected_line}");
                prop_assert_eq!(shown.trim_end(), expected_shown.trim_end());
            }

            #[test]
            fn escape_always_cancels(
                script in proptest::string::string_regex("[a-z0-9 \u{08}]{0,30}").expect("regex")
            ) {
                let mut console = MemoryConsole::with_input(&script);
                console.type_text("\x1b");
                let outcome = read_line(&mut console, "> ", None, None).unwrap();
                prop_assert_eq!(outcome, ReadOutcome::Cancelled);
                prop_assert_eq!(console.screen_line(0), ">");
            }
        }
    }
}
