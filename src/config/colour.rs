//! Colour names accepted in `[display]`.

use crossterm::style::Color;

use crate::error::ConfigError;

/// Parse a colour name (`dark_yellow`, `DarkYellow`, `dark-yellow`, `grey`,
/// `gray`, ...) or a `#rrggbb` literal.
pub fn parse_colour(raw: &str) -> Result<Color, ConfigError> {
    let trimmed = raw.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| invalid(raw));
    }

    let key: String = trimmed
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect();
    let colour = match key.as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Black,
        "darkgrey" | "darkgray" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => return Err(invalid(raw)),
    };
    Ok(colour)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

fn invalid(raw: &str) -> ConfigError {
    ConfigError::Invalid(format!(
        "unknown colour `{raw}`: expected a name like `dark_yellow` or `#rrggbb`"
    ))
}
