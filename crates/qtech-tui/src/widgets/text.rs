//! Span helpers shared by the page widgets

use qtech_core::content::emphasis_segments;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Build a line from copy with inline `**bold**` markers
pub fn emphasis_line(text: &str, base: Style) -> Line<'_> {
    let spans: Vec<Span<'_>> = emphasis_segments(text)
        .into_iter()
        .map(|(segment, bold)| {
            if bold {
                Span::styled(segment, base.add_modifier(Modifier::BOLD))
            } else {
                Span::styled(segment, base)
            }
        })
        .collect();
    Line::from(spans)
}

/// Tail of `text` that fits in `width` columns
///
/// Used by single-line inputs so the caret end stays visible.
pub fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }

    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    &text[start..]
}

/// Truncate to `max_len` characters, adding an ellipsis if needed
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let mut out: String = text.chars().take(max_len - 1).collect();
        out.push('…');
        out
    }
}
