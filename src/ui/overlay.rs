//! Draft and confirmation overlays.
//!
//! Rendered last, on top of the panels, using [`Clear`] so the underlying
//! content does not bleed through. What is shown inside the draft box is
//! driven entirely by the session phase.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::{DraftPhase, DraftSession};

use super::helpers::{centered_rect, sanitize, truncate};
use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_FOCUS, COLOR_OVERLAY_BG, COLOR_TEXT,
};

/// Render the draft overlay if a session is open.
pub fn render_draft_overlay(frame: &mut Frame, app: &App) {
    let Some(session) = &app.draft else {
        return;
    };

    let area = frame.area();
    let overlay = centered_rect(
        area,
        (area.width * 7 / 10).clamp(40, 100).min(area.width),
        (area.height * 7 / 10).clamp(12, 24).min(area.height),
    );
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_FOCUS))
        .style(Style::default().bg(COLOR_OVERLAY_BG))
        .title(Span::styled(
            format!(" Draft reply to {} ", truncate(&sanitize(&session.contact), 40)),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    match session.phase {
        DraftPhase::Generating => render_wait(frame, inner, "Generating draft..."),
        DraftPhase::Sending => render_wait(frame, inner, "Sending..."),
        DraftPhase::Failed => render_failed(frame, inner, session),
        DraftPhase::Ready => render_ready(frame, inner, session, app.editing_draft),
        DraftPhase::Confirming => render_confirm(frame, inner, session),
    }
}

fn render_wait(frame: &mut Frame, area: Rect, label: &str) {
    let lines = vec![
        Line::from(Span::styled(label, Style::default().fg(COLOR_TEXT))),
        Line::default(),
        Line::from(Span::styled("esc close", Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_failed(frame: &mut Frame, area: Rect, session: &DraftSession) {
    let error = session.error.as_deref().unwrap_or("Failed to generate draft");
    let lines = vec![
        Line::from(Span::styled(
            sanitize(error),
            Style::default().fg(COLOR_ERROR),
        )),
        Line::default(),
        Line::from(Span::styled(
            "r regenerate · esc close",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_ready(frame: &mut Frame, area: Rect, session: &DraftSession, editing: bool) {
    let mut lines = Vec::new();

    if let Some(count) = session.context_messages {
        lines.push(Line::from(Span::styled(
            format!("{} messages analyzed", count),
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::default());
    }

    // Draft body; a trailing cursor marks edit mode
    let line_count = session.text.split('\n').count();
    for (i, text_line) in session.text.split('\n').enumerate() {
        let mut spans = vec![Span::styled(
            sanitize(text_line),
            Style::default().fg(COLOR_TEXT),
        )];
        if editing && i == line_count - 1 {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    let hints = if editing {
        "type to edit · enter newline · esc done editing"
    } else {
        "e edit · r regenerate · s send · esc close"
    };
    lines.push(Line::from(Span::styled(
        hints,
        Style::default().fg(COLOR_DIM),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_confirm(frame: &mut Frame, area: Rect, session: &DraftSession) {
    let preview = truncate(&sanitize(&session.text), (area.width as usize) * 2);
    let lines = vec![
        Line::from(vec![
            Span::styled("Send to ", Style::default().fg(COLOR_TEXT)),
            Span::styled(
                sanitize(&session.contact),
                Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("?", Style::default().fg(COLOR_TEXT)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!("\"{}\"", preview),
            Style::default().fg(COLOR_DIM),
        )),
        Line::default(),
        Line::from(Span::styled(
            "y/enter send · n back · esc close",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
