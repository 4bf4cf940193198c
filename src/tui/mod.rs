//! Terminal user-interface building blocks.
//!
//! `input` holds the line editor and key prompts, `printer` renders menu
//! chrome and result banners, `settings` keeps the hardcoded defaults.

pub mod input;
pub mod printer;
pub mod settings;
pub mod text;

pub use input::{read_key, read_line, read_permission, ReadOutcome};
