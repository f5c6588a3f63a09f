//! Keyboard input handling.
//!
//! Input routing depends on what is on screen: the draft overlay captures
//! all keys while open, threshold editing captures digits, and everything
//! else falls through to the global bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::api::ApiClient;
use crate::app::{App, Panel};
use crate::state::DraftPhase;

impl App {
    /// Handle a key event from the terminal.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.draft.is_some() {
            self.handle_draft_key(key);
            return;
        }
        if self.editing_threshold {
            self.handle_threshold_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('o') => self.toggle_sort(),
            KeyCode::Char('t') => self.editing_threshold = true,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Enter | KeyCode::Char('g') => self.open_draft_for_selected(),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Panel::NeedReply => Panel::AwaitingReply,
            Panel::AwaitingReply => Panel::NeedReply,
        };
    }

    fn select_next(&mut self) {
        let len = self.visible(self.focus).len();
        let selected = self.selected_index_mut();
        if len > 0 && *selected + 1 < len {
            *selected += 1;
        }
    }

    fn select_prev(&mut self) {
        let selected = self.selected_index_mut();
        *selected = selected.saturating_sub(1);
    }

    fn handle_threshold_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() && self.threshold_input.len() < 4 => {
                self.threshold_input.push(c);
            }
            KeyCode::Backspace => {
                self.threshold_input.pop();
            }
            KeyCode::Enter => {
                self.commit_threshold();
                self.editing_threshold = false;
                self.refresh();
            }
            KeyCode::Esc => {
                self.commit_threshold();
                self.editing_threshold = false;
            }
            _ => {}
        }
    }

    /// Normalize the threshold input to its clamped value, as the
    /// original control does when the field loses focus.
    fn commit_threshold(&mut self) {
        let clamped = ApiClient::clamp_threshold(self.current_threshold());
        self.threshold_input = clamped.to_string();
    }

    fn handle_draft_key(&mut self, key: KeyEvent) {
        let Some(phase) = self.draft.as_ref().map(|s| s.phase) else {
            return;
        };
        match phase {
            DraftPhase::Generating | DraftPhase::Sending => {
                // Only closing is allowed while a request is in flight
                if key.code == KeyCode::Esc {
                    self.close_draft();
                }
            }
            DraftPhase::Failed => match key.code {
                KeyCode::Esc => self.close_draft(),
                KeyCode::Char('r') => self.regenerate(),
                _ => {}
            },
            DraftPhase::Ready => {
                if self.editing_draft {
                    self.handle_draft_edit_key(key);
                } else {
                    match key.code {
                        KeyCode::Esc => self.close_draft(),
                        KeyCode::Char('e') => self.editing_draft = true,
                        KeyCode::Char('r') => self.regenerate(),
                        KeyCode::Char('s') => self.request_send(),
                        _ => {}
                    }
                }
            }
            DraftPhase::Confirming => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm_send(),
                KeyCode::Char('n') => self.cancel_confirm(),
                // Escape discards the session from any phase
                KeyCode::Esc => self.close_draft(),
                _ => {}
            },
        }
    }

    fn handle_draft_edit_key(&mut self, key: KeyEvent) {
        let Some(session) = self.draft.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.editing_draft = false,
            KeyCode::Char(c) => session.text.push(c),
            KeyCode::Enter => session.text.push('\n'),
            KeyCode::Backspace => {
                session.text.pop();
            }
            _ => {}
        }
    }
}
