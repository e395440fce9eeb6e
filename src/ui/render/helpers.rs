//! Shared rendering helpers and constants.

use ratatui::layout::Rect;

/// Label of each row's remove control.
pub const REMOVE_LABEL: &str = "[Remove]";

/// Label of the add button.
pub const ADD_LABEL: &str = "[Add]";

/// Sanitize control characters.
pub fn sanitize_char(c: char) -> char {
    match c {
        '\x00'..='\x1f' | '\x7f' => '\u{FFFD}',
        _ => c,
    }
}

/// Truncate to `max_len` characters, ending in an ellipsis if cut.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.chars().map(sanitize_char).collect()
    } else if max_len == 0 {
        String::new()
    } else {
        let truncated: String = s.chars().take(max_len - 1).map(sanitize_char).collect();
        format!("{}…", truncated)
    }
}

/// Keep the last `max_len` characters, with a leading ellipsis if cut.
pub fn tail_str(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let skip = char_count - max_len + 1;
        let tail: String = s.chars().skip(skip).collect();
        format!("…{}", tail)
    }
}

/// Rect of `width` x `height` centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
