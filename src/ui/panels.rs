//! Status bar and triage panel rendering.
//!
//! Each panel is a bordered list of conversation cards rendered line by
//! line; the focused panel gets a bright border and a `>` cursor. Cards
//! have a fixed height so scrolling is a plain offset calculation.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Panel};
use crate::models::{Conversation, ListKind};
use crate::state::ConnectionStatus;

use super::helpers::{format_hours, sanitize, truncate};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FOCUS, COLOR_GROUP, COLOR_OK,
    COLOR_TEXT, COLOR_URGENT,
};

/// Rows per conversation card: header, message, context, spacing.
const LINES_PER_CARD: usize = 4;

/// Render the top status bar: title, connection state, threshold, sort.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_style = match &app.status {
        ConnectionStatus::Unknown => Style::default().fg(COLOR_DIM),
        ConnectionStatus::Connected => Style::default().fg(COLOR_OK),
        ConnectionStatus::Error(_) => Style::default().fg(COLOR_ERROR),
    };

    let mut spans = vec![
        Span::styled(
            "nudge",
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(COLOR_DIM)),
        Span::styled(app.status.label().to_string(), status_style),
        Span::styled("  │  threshold: ", Style::default().fg(COLOR_DIM)),
    ];

    if app.editing_threshold {
        spans.push(Span::styled(
            app.threshold_input.clone(),
            Style::default().fg(COLOR_TEXT),
        ));
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
        spans.push(Span::styled("h", Style::default().fg(COLOR_DIM)));
    } else {
        spans.push(Span::styled(
            format!("{}h", app.threshold_input),
            Style::default().fg(COLOR_TEXT),
        ));
    }

    spans.push(Span::styled("  │  sort: ", Style::default().fg(COLOR_DIM)));
    spans.push(Span::styled(
        app.sort_order.label(),
        Style::default().fg(COLOR_TEXT),
    ));

    if app.loading_conversations {
        spans.push(Span::styled(
            "  │  loading...",
            Style::default().fg(COLOR_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the bottom key-hint line.
pub fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.editing_threshold {
        "type hours · enter apply · esc done"
    } else {
        "q quit · r refresh · tab switch · j/k move · enter draft · t threshold · o sort"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );
}

/// Render one triage panel into `area`.
pub fn render_panel(frame: &mut Frame, area: Rect, app: &App, panel: Panel) {
    let (title, kind) = match panel {
        Panel::NeedReply => (" Needs Reply ", ListKind::NeedReply),
        Panel::AwaitingReply => (" Awaiting Their Reply ", ListKind::AwaitingReply),
    };
    let focused = app.focus == panel;
    let border_style = if focused {
        Style::default().fg(COLOR_FOCUS)
    } else {
        Style::default().fg(COLOR_BORDER)
    };

    let items = app.visible(panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!("{}({}) ", title, items.len()),
            border_style,
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(error) = &app.list_error {
        render_list_error(frame, inner, error);
        return;
    }
    if app.loading_conversations && items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Loading conversations...",
                Style::default().fg(COLOR_DIM),
            )),
            inner,
        );
        return;
    }
    if items.is_empty() {
        render_empty(frame, inner, panel);
        return;
    }

    let visible_cards = (inner.height as usize) / LINES_PER_CARD;
    if visible_cards == 0 {
        return;
    }
    let selected = app.selected_index(panel);
    let offset = if selected >= visible_cards {
        selected + 1 - visible_cards
    } else {
        0
    };

    for (row, (i, conversation)) in items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_cards)
        .enumerate()
    {
        let y = inner.y + (row * LINES_PER_CARD) as u16;
        let is_selected = focused && i == selected;
        render_card(frame, inner.x, y, inner.width, conversation, kind, is_selected);
    }
}

/// Failed-fetch state replacing the panel contents.
fn render_list_error(frame: &mut Frame, area: Rect, error: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Failed to load conversations",
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(error, area.width as usize),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Empty-list placeholder; the copy differs per panel.
fn render_empty(frame: &mut Frame, area: Rect, panel: Panel) {
    let detail = match panel {
        Panel::NeedReply => "No messages waiting for your reply!",
        Panel::AwaitingReply => "No one is ghosting you!",
    };
    let lines = vec![
        Line::from(Span::styled(
            "✨ All caught up!",
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail, Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Render a single conversation card.
///
/// Line 1: > Name [Group] (handle)                 30h
/// Line 2:   "last message"
/// Line 3:   5 messages with context
fn render_card(
    frame: &mut Frame,
    x: u16,
    y: u16,
    width: u16,
    conversation: &Conversation,
    kind: ListKind,
    is_selected: bool,
) {
    let content_width = (width as usize).saturating_sub(2);

    let prefix = if is_selected { "> " } else { "  " };
    let prefix_style = Style::default().fg(COLOR_ACCENT);

    let time_text = format_hours(conversation.hours_ago);
    let time_style = if conversation.is_urgent(kind) {
        Style::default().fg(COLOR_URGENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let name_style = if is_selected {
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TEXT)
    };

    let badge = if conversation.is_group { " [Group]" } else { "" };
    // The raw handle is shown next to the name only when a contact name
    // resolved, matching the card layout of the web UI
    let handle = match &conversation.contact_name {
        Some(_) => format!(" ({})", conversation.contact),
        None => String::new(),
    };

    let name_max = content_width
        .saturating_sub(time_text.width() + 2)
        .saturating_sub(badge.len() + handle.width());
    let name_text = truncate(&sanitize(conversation.display_name()), name_max);

    let used = name_text.width() + badge.len() + handle.width();
    let padding = " ".repeat(content_width.saturating_sub(used + time_text.width()));

    let header = Line::from(vec![
        Span::styled(prefix, prefix_style),
        Span::styled(name_text, name_style),
        Span::styled(badge, Style::default().fg(COLOR_GROUP)),
        Span::styled(handle, Style::default().fg(COLOR_DIM)),
        Span::raw(padding),
        Span::styled(time_text, time_style),
    ]);
    frame.render_widget(Paragraph::new(header), Rect::new(x, y, width, 1));

    let message = format!(
        "\"{}\"",
        truncate(
            &sanitize(&conversation.last_message),
            content_width.saturating_sub(2)
        )
    );
    let message_line = Line::from(vec![
        Span::raw("  "),
        Span::styled(message, Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(message_line), Rect::new(x, y + 1, width, 1));

    let context_line = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{} messages with context", conversation.context_count),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(context_line), Rect::new(x, y + 2, width, 1));
}
