//! Color constants for the triage UI.
//!
//! Minimal dark palette; urgency and status states get the only strong
//! colors on screen.

use ratatui::style::Color;

/// Border color for unfocused panels
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border color for the focused panel
pub const COLOR_FOCUS: Color = Color::White;

/// Primary text
pub const COLOR_TEXT: Color = Color::White;

/// Dim text for secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Accent for the selection cursor
pub const COLOR_ACCENT: Color = Color::White;

/// Time badge for conversations past the urgency threshold
pub const COLOR_URGENT: Color = Color::Red;

/// Healthy connection indicator
pub const COLOR_OK: Color = Color::LightGreen;

/// Error states: failed fetches, failed generation, bad connection
pub const COLOR_ERROR: Color = Color::Red;

/// Success toast text
pub const COLOR_SUCCESS: Color = Color::LightGreen;

/// Group conversation badge
pub const COLOR_GROUP: Color = Color::Cyan;

/// Background for the draft and confirmation overlays
pub const COLOR_OVERLAY_BG: Color = Color::Rgb(10, 15, 35);
