//! Shared text formatting helpers used by terminal rendering.

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Left-align `s` in a field of `width` cells, padding with spaces.
pub fn pad_right(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width.max(s.len()));
    out.push_str(s);
    for _ in visible_width(s)..width {
        out.push(' ');
    }
    out
}

/// Reverse a string by chars (`"-==< "` becomes `" <==-"`).
pub fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}
