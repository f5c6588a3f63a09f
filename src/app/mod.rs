//! Application controller.
//!
//! [`App`] owns all mutable state (connection status, the two triage
//! lists, the draft session, the toast) and is only ever touched from the
//! event-loop task. Network work happens on spawned tasks that report
//! back through the [`AppMessage`] channel; `handle_message` applies
//! completions, guarding against stale draft responses with the session
//! epoch.

mod actions;
mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Conversation, DraftResponse, HealthReport, SendResponse};
use crate::state::{sorted_by_age, ConnectionStatus, DraftPhase, DraftSession, SortOrder};
use crate::toast::Toast;

/// Which triage panel has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    NeedReply,
    AwaitingReply,
}

/// The application controller.
pub struct App {
    /// Backend API client, cloned into spawned tasks
    pub api: Arc<ApiClient>,
    /// Connection indicator from the startup health check
    pub status: ConnectionStatus,
    /// Conversations where the user sent the last message
    pub awaiting_reply: Vec<Conversation>,
    /// Conversations where the other party is waiting on the user
    pub need_reply: Vec<Conversation>,
    /// Presentation sort order
    pub sort_order: SortOrder,
    /// Raw threshold input; parsed and clamped at fetch time
    pub threshold_input: String,
    /// Whether the threshold input is being edited
    pub editing_threshold: bool,
    /// Focused panel
    pub focus: Panel,
    /// Selected row in the needs-reply panel (index into the sorted view)
    pub selected_need: usize,
    /// Selected row in the awaiting panel (index into the sorted view)
    pub selected_awaiting: usize,
    /// Inline error replacing the panels after a failed fetch
    pub list_error: Option<String>,
    /// In-flight guard for the dual list fetch
    pub loading_conversations: bool,
    /// The single draft session; `None` means the draft view is closed
    pub draft: Option<DraftSession>,
    /// Whether keystrokes edit the draft text
    pub editing_draft: bool,
    /// Current transient status message
    pub toast: Option<Toast>,
    /// Set by the quit key; the event loop exits on it
    pub should_quit: bool,
    /// Source for draft session epoch tokens
    next_epoch: u64,
    /// Sender handed to spawned tasks
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create the controller and the receiving end of its message channel.
    pub fn new(api: Arc<ApiClient>) -> (Self, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Self {
            api,
            status: ConnectionStatus::default(),
            awaiting_reply: Vec::new(),
            need_reply: Vec::new(),
            sort_order: SortOrder::default(),
            threshold_input: "48".to_string(),
            editing_threshold: false,
            focus: Panel::default(),
            selected_need: 0,
            selected_awaiting: 0,
            list_error: None,
            loading_conversations: false,
            draft: None,
            editing_draft: false,
            toast: None,
            should_quit: false,
            next_epoch: 0,
            tx,
        };
        (app, rx)
    }

    /// The threshold the next fetch will use, read from the input control.
    pub fn current_threshold(&self) -> i64 {
        self.threshold_input.trim().parse().unwrap_or(0)
    }

    /// The sorted view of a panel's list, as rendered.
    pub fn visible(&self, panel: Panel) -> Vec<Conversation> {
        match panel {
            Panel::NeedReply => sorted_by_age(&self.need_reply, self.sort_order),
            Panel::AwaitingReply => sorted_by_age(&self.awaiting_reply, self.sort_order),
        }
    }

    /// Selected row index for a panel.
    pub fn selected_index(&self, panel: Panel) -> usize {
        match panel {
            Panel::NeedReply => self.selected_need,
            Panel::AwaitingReply => self.selected_awaiting,
        }
    }

    /// The conversation under the cursor in the focused panel.
    pub fn selected_conversation(&self) -> Option<Conversation> {
        let visible = self.visible(self.focus);
        visible.get(self.selected_index(self.focus)).cloned()
    }

    pub(crate) fn selected_index_mut(&mut self) -> &mut usize {
        match self.focus {
            Panel::NeedReply => &mut self.selected_need,
            Panel::AwaitingReply => &mut self.selected_awaiting,
        }
    }

    /// Keep both selections inside their lists after a refresh or removal.
    pub(crate) fn clamp_selections(&mut self) {
        self.selected_need = self
            .selected_need
            .min(self.need_reply.len().saturating_sub(1));
        self.selected_awaiting = self
            .selected_awaiting
            .min(self.awaiting_reply.len().saturating_sub(1));
    }

    pub(crate) fn toast_success(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::success(message));
    }

    pub(crate) fn toast_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::error(message));
    }

    /// Drop the toast once its TTL has elapsed. Called from the tick arm
    /// of the event loop.
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub(crate) fn sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.tx.clone()
    }

    pub(crate) fn mint_epoch(&mut self) -> u64 {
        self.next_epoch += 1;
        self.next_epoch
    }

    /// Apply an async completion.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::HealthChecked(result) => self.apply_health(result),
            AppMessage::ConversationsLoaded(result) => self.apply_conversations(result),
            AppMessage::DraftGenerated { epoch, result } => self.apply_draft(epoch, result),
            AppMessage::SendFinished { epoch, result } => self.apply_send(epoch, result),
        }
    }

    fn apply_health(&mut self, result: Result<HealthReport, ApiError>) {
        self.status = match result {
            Ok(report) => {
                if report.api_key_configured && report.database_accessible {
                    // Seed the threshold input with the server default
                    self.threshold_input = report.stale_threshold_hours.to_string();
                    ConnectionStatus::Connected
                } else if !report.api_key_configured {
                    ConnectionStatus::Error("API key not configured".to_string())
                } else {
                    ConnectionStatus::Error("Database not accessible".to_string())
                }
            }
            Err(err) => {
                tracing::warn!(%err, "health check failed");
                ConnectionStatus::Error("Server offline".to_string())
            }
        };
    }

    fn apply_conversations(
        &mut self,
        result: Result<(Vec<Conversation>, Vec<Conversation>), ApiError>,
    ) {
        self.loading_conversations = false;
        match result {
            Ok((awaiting, need)) => {
                self.awaiting_reply = awaiting;
                self.need_reply = need;
                self.list_error = None;
                self.clamp_selections();
                let total = self.awaiting_reply.len() + self.need_reply.len();
                if total > 0 {
                    self.toast_success(format!(
                        "Found {} to reply, {} waiting",
                        self.need_reply.len(),
                        self.awaiting_reply.len()
                    ));
                }
            }
            Err(err) => {
                // Previous lists stay in memory; the panels show the error
                self.list_error = Some(err.to_string());
                self.toast_error(err.to_string());
            }
        }
    }

    fn apply_draft(&mut self, epoch: u64, result: Result<DraftResponse, ApiError>) {
        let Some(session) = self.draft.as_mut() else {
            tracing::debug!(epoch, "draft response after close, discarding");
            return;
        };
        if session.epoch != epoch {
            tracing::debug!(
                epoch,
                current = session.epoch,
                "stale draft response, discarding"
            );
            return;
        }
        match result {
            Ok(response) => {
                if session.transition(DraftPhase::Ready) {
                    session.text = response.draft;
                    session.context_messages = Some(response.context_messages);
                    session.error = None;
                }
            }
            Err(err) => {
                session.transition(DraftPhase::Failed);
                session.error = Some(err.to_string());
                self.toast_error(err.to_string());
            }
        }
    }

    fn apply_send(&mut self, epoch: u64, result: Result<SendResponse, ApiError>) {
        let Some(session) = self.draft.as_mut() else {
            tracing::debug!(epoch, "send response after close, discarding");
            return;
        };
        if session.epoch != epoch {
            tracing::debug!(
                epoch,
                current = session.epoch,
                "stale send response, discarding"
            );
            return;
        }
        match result {
            Ok(_) => {
                let chat_id = session.chat_id;
                self.draft = None;
                self.editing_draft = false;
                self.awaiting_reply.retain(|c| c.chat_id != chat_id);
                self.clamp_selections();
                self.toast_success("Message sent successfully!");
            }
            Err(err) => {
                // Draft view stays open so the user can retry
                session.transition(DraftPhase::Ready);
                self.toast_error(err.to_string());
            }
        }
    }
}
