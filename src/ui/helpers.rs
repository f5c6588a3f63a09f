//! Formatting and layout helpers for rendering.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Replace control characters with spaces so message text cannot break
/// the terminal output. Raw message bodies may carry newlines, tabs, or
/// worse.
pub fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Truncate a string to at most `max_width` display columns, appending
/// "..." if anything was cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Format an hours-ago value the way the server reports it: whole hours
/// without a decimal, fractional hours to one decimal place.
pub fn format_hours(hours: f64) -> String {
    if (hours - hours.round()).abs() < 0.05 {
        format!("{}h", hours.round() as i64)
    } else {
        format!("{:.1}h", hours)
    }
}

/// A centered rect of the given size, clamped to fit inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
