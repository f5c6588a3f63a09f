//! User-triggered operations.
//!
//! Each network action spawns a tokio task holding clones of the API
//! client and the message sender; the task's only side effect is the
//! [`AppMessage`] it sends back. In-flight requests are never cancelled —
//! completions that no longer apply are dropped by the epoch guard in
//! `handle_message`.

use crate::app::{App, AppMessage};
use crate::state::{DraftPhase, DraftSession};

impl App {
    /// Run the startup health check. Advisory only; never blocks anything.
    pub fn check_health(&self) {
        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            let result = api.health().await;
            let _ = tx.send(AppMessage::HealthChecked(result));
        });
    }

    /// Fetch both triage lists with the current threshold.
    ///
    /// Rejected while a fetch is already in flight.
    pub fn refresh(&mut self) {
        if self.loading_conversations {
            tracing::debug!("refresh ignored, fetch already in flight");
            return;
        }
        self.loading_conversations = true;
        self.list_error = None;

        let threshold = self.current_threshold();
        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            let result = api.fetch_lists(threshold).await;
            let _ = tx.send(AppMessage::ConversationsLoaded(result));
        });
    }

    /// Toggle the presentation sort order. Re-renders only; no refetch.
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Open a draft for the conversation under the cursor.
    pub fn open_draft_for_selected(&mut self) {
        if let Some(conversation) = self.selected_conversation() {
            self.open_draft(conversation.chat_id, conversation.contact);
        }
    }

    /// Open a draft session for a conversation and start generation.
    ///
    /// Any prior session is discarded wholesale; at most one draft is
    /// active at a time.
    pub fn open_draft(&mut self, chat_id: i64, contact: String) {
        let epoch = self.mint_epoch();
        self.draft = Some(DraftSession::new(chat_id, contact.clone(), epoch));
        self.editing_draft = false;
        self.spawn_generate(chat_id, contact, epoch);
    }

    /// Re-run generation for the open session, replacing any user edits.
    ///
    /// Valid only from `Ready` or `Failed`.
    pub fn regenerate(&mut self) {
        match self.draft.as_ref() {
            Some(session) if session.phase.can_transition(DraftPhase::Generating) => {}
            Some(session) => {
                tracing::warn!(phase = ?session.phase, "regenerate rejected");
                return;
            }
            None => return,
        }
        let epoch = self.mint_epoch();
        let Some(session) = self.draft.as_mut() else {
            return;
        };
        session.transition(DraftPhase::Generating);
        session.epoch = epoch;
        session.error = None;
        session.text.clear();
        session.context_messages = None;
        let chat_id = session.chat_id;
        let contact = session.contact.clone();
        self.editing_draft = false;
        self.spawn_generate(chat_id, contact, epoch);
    }

    /// Move the open session to the confirmation step.
    ///
    /// The session text already carries any user edits, so this is purely
    /// a phase change.
    pub fn request_send(&mut self) {
        if let Some(session) = self.draft.as_mut() {
            self.editing_draft = false;
            session.transition(DraftPhase::Confirming);
        }
    }

    /// Confirm and issue the send request.
    pub fn confirm_send(&mut self) {
        let Some(session) = self.draft.as_mut() else {
            return;
        };
        if !session.transition(DraftPhase::Sending) {
            return;
        }
        let epoch = session.epoch;
        let recipient = session.contact.clone();
        let message = session.text.clone();

        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            let result = api.send_message(&recipient, &message).await;
            let _ = tx.send(AppMessage::SendFinished { epoch, result });
        });
    }

    /// Back out of the confirmation step.
    pub fn cancel_confirm(&mut self) {
        if let Some(session) = self.draft.as_mut() {
            session.transition(DraftPhase::Ready);
        }
    }

    /// Close the draft view, discarding the session unconditionally.
    ///
    /// In-flight requests keep running; their completions are dropped by
    /// the epoch guard.
    pub fn close_draft(&mut self) {
        self.draft = None;
        self.editing_draft = false;
    }

    fn spawn_generate(&self, chat_id: i64, contact: String, epoch: u64) {
        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            let result = api.generate_draft(chat_id, &contact).await;
            let _ = tx.send(AppMessage::DraftGenerated { epoch, result });
        });
    }
}
