//! Rendering entry point.
//!
//! One [`render`] call per frame; the layout is a status bar, the two
//! triage panels side by side, a key-hint line, and a toast line. The
//! draft overlay renders last, on top.

mod helpers;
mod overlay;
mod panels;
mod theme;

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Panel};
use crate::toast::ToastKind;

/// Render a full frame from the current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [status_area, panel_area, hint_area, toast_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    panels::render_status_bar(frame, status_area, app);

    let [need_area, awaiting_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(panel_area);
    panels::render_panel(frame, need_area, app, Panel::NeedReply);
    panels::render_panel(frame, awaiting_area, app, Panel::AwaitingReply);

    panels::render_hints(frame, hint_area, app);
    render_toast(frame, toast_area, app);

    overlay::render_draft_overlay(frame, app);
}

/// Render the transient notification line at the bottom of the screen.
fn render_toast(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let Some(toast) = &app.toast else {
        return;
    };
    let color = match toast.kind {
        ToastKind::Success => theme::COLOR_SUCCESS,
        ToastKind::Error => theme::COLOR_ERROR,
    };
    let line = Line::from(Span::styled(
        format!("{} {}", toast.icon(), toast.message),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
