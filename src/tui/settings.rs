//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak prompt strings, labels, glyph
//! decorations and colors used when no configuration overrides them.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Menu chrome
// ---------------------------------------------------------------------------

pub const PROMPT_DEFAULT: &str = "> ";
pub const TITLE_DECORATION_DEFAULT: &str = "-==< ";
/// Extra cells between the widest command name and its description.
pub const COMMAND_COLUMN_GUTTER: usize = 4;

// ---------------------------------------------------------------------------
// Built-in commands
// ---------------------------------------------------------------------------

pub const COMMAND_EXIT: &str = "exit";
pub const COMMAND_EXIT_DESCRIPTION: &str = "Exit this menu";
pub const COMMAND_HELP: &str = "help";
pub const COMMAND_HELP_DESCRIPTION: &str = "Prints the command list";

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const LABEL_UNKNOWN_COMMAND: &str = "Unknown command";
pub const LABEL_COMMAND_FINISHED: &str = "Command finished: ";
pub const LABEL_SUCCESS: &str = "Success";
pub const LABEL_FAILED: &str = "Failed";
pub const LABEL_CANCELLED: &str = "Cancelled";
pub const LABEL_ERROR_MESSAGE: &str = "Error message: ";

pub const PERMISSION_SUFFIX_DEFAULT_YES: &str = " (Y/n) ";
pub const PERMISSION_SUFFIX_DEFAULT_NO: &str = " (y/N) ";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_TITLE: Color = Color::Green;
pub const COLOR_TITLE_DECORATION: Color = Color::Yellow;
pub const COLOR_PROMPT: Color = Color::White;

pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_RESULT_SUCCESS: Color = Color::Green;
pub const COLOR_RESULT_FAILED: Color = Color::Red;
pub const COLOR_RESULT_CANCELLED: Color = Color::DarkYellow;

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

pub fn permission_suffix(default: bool) -> &'static str {
    if default {
        PERMISSION_SUFFIX_DEFAULT_YES
    } else {
        PERMISSION_SUFFIX_DEFAULT_NO
    }
}
