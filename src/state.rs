//! Application state types.
//!
//! Contains the plain state the [`App`](crate::app::App) controller owns:
//! the backend connection indicator, the presentation sort order, and the
//! draft session with its explicit phase machine.

use crate::models::Conversation;

/// Tri-state backend connection indicator set by the startup health check.
///
/// Advisory only; an error state never blocks other operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// Health check has not completed yet
    #[default]
    Unknown,
    /// Backend reachable and fully configured
    Connected,
    /// Backend unreachable or misconfigured
    Error(String),
}

impl ConnectionStatus {
    /// Status line text for the indicator.
    pub fn label(&self) -> &str {
        match self {
            ConnectionStatus::Unknown => "Checking...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Error(message) => message,
        }
    }
}

/// Presentation-only ordering of the triage lists by age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest hours-ago first (newest activity first)
    #[default]
    NewestFirst,
    /// Largest hours-ago first (oldest activity first)
    OldestFirst,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::NewestFirst => SortOrder::OldestFirst,
            SortOrder::OldestFirst => SortOrder::NewestFirst,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "newest",
            SortOrder::OldestFirst => "oldest",
        }
    }
}

/// Return a sorted copy of a conversation list. The source list is never
/// mutated; ordering is recomputed from it on every render.
pub fn sorted_by_age(list: &[Conversation], order: SortOrder) -> Vec<Conversation> {
    let mut sorted = list.to_vec();
    match order {
        SortOrder::NewestFirst => sorted.sort_by(|a, b| {
            a.hours_ago
                .partial_cmp(&b.hours_ago)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortOrder::OldestFirst => sorted.sort_by(|a, b| {
            b.hours_ago
                .partial_cmp(&a.hours_ago)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
    sorted
}

/// Phase of the draft workflow for the open session.
///
/// The closed state is represented by the absence of a [`DraftSession`],
/// so every phase here implies the draft view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    /// Generation request in flight; controls disabled
    Generating,
    /// Draft text present and editable; regenerate/send enabled
    Ready,
    /// Waiting for explicit user confirmation before sending
    Confirming,
    /// Send request in flight
    Sending,
    /// Generation failed; error shown inline, retry via regenerate
    Failed,
}

impl DraftPhase {
    /// Whether a transition from `self` to `to` is legal.
    pub fn can_transition(self, to: DraftPhase) -> bool {
        use DraftPhase::*;
        matches!(
            (self, to),
            (Generating, Ready)
                | (Generating, Failed)
                | (Ready, Generating)
                | (Ready, Confirming)
                | (Confirming, Ready)
                | (Confirming, Sending)
                | (Sending, Ready)
                | (Failed, Generating)
        )
    }
}

/// The single in-progress draft: target conversation, current text, and
/// the epoch token used to discard stale async completions.
///
/// At most one session exists at a time; opening a draft for a new target
/// replaces any prior session wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSession {
    /// Target chat id
    pub chat_id: i64,
    /// Target recipient handle
    pub contact: String,
    /// Current draft text (including user edits)
    pub text: String,
    /// Context-message count reported by the last generation
    pub context_messages: Option<u32>,
    /// Inline error from a failed generation
    pub error: Option<String>,
    /// Current workflow phase
    pub phase: DraftPhase,
    /// Monotonic token; async completions carrying an older token are
    /// discarded instead of being applied to this session.
    pub epoch: u64,
}

impl DraftSession {
    /// Open a new session in the `Generating` phase.
    pub fn new(chat_id: i64, contact: String, epoch: u64) -> Self {
        Self {
            chat_id,
            contact,
            text: String::new(),
            context_messages: None,
            error: None,
            phase: DraftPhase::Generating,
            epoch,
        }
    }

    /// Apply a phase transition if the table allows it.
    ///
    /// Returns `false` (and leaves the phase unchanged) for an illegal
    /// transition.
    pub fn transition(&mut self, to: DraftPhase) -> bool {
        if self.phase.can_transition(to) {
            tracing::debug!(from = ?self.phase, ?to, chat_id = self.chat_id, "draft transition");
            self.phase = to;
            true
        } else {
            tracing::warn!(from = ?self.phase, ?to, chat_id = self.chat_id, "rejected draft transition");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(chat_id: i64, hours_ago: f64) -> Conversation {
        Conversation {
            chat_id,
            contact: format!("+1555{:07}", chat_id),
            contact_name: None,
            last_message: "hi".to_string(),
            hours_ago,
            is_group: false,
            context_count: 0,
        }
    }

    #[test]
    fn test_sorted_newest_first_is_non_decreasing() {
        let list = vec![
            conversation(1, 50.0),
            conversation(2, 10.0),
            conversation(3, 30.0),
        ];
        let sorted = sorted_by_age(&list, SortOrder::NewestFirst);
        let hours: Vec<f64> = sorted.iter().map(|c| c.hours_ago).collect();
        assert_eq!(hours, vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn test_sorted_oldest_first_is_non_increasing() {
        let list = vec![
            conversation(1, 50.0),
            conversation(2, 10.0),
            conversation(3, 30.0),
        ];
        let sorted = sorted_by_age(&list, SortOrder::OldestFirst);
        let hours: Vec<f64> = sorted.iter().map(|c| c.hours_ago).collect();
        assert_eq!(hours, vec![50.0, 30.0, 10.0]);
    }

    #[test]
    fn test_sort_does_not_mutate_source() {
        let list = vec![conversation(1, 50.0), conversation(2, 10.0)];
        let _ = sorted_by_age(&list, SortOrder::NewestFirst);
        assert_eq!(list[0].chat_id, 1);
        assert_eq!(list[1].chat_id, 2);
    }

    #[test]
    fn test_sort_is_stable_across_repeated_calls() {
        // Ties keep their source order, so repeated sorts agree exactly.
        let list = vec![
            conversation(1, 20.0),
            conversation(2, 20.0),
            conversation(3, 5.0),
        ];
        let first = sorted_by_age(&list, SortOrder::NewestFirst);
        let second = sorted_by_age(&list, SortOrder::NewestFirst);
        assert_eq!(first, second);
        assert_eq!(first[1].chat_id, 1);
        assert_eq!(first[2].chat_id, 2);
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::NewestFirst.toggled(), SortOrder::OldestFirst);
        assert_eq!(SortOrder::OldestFirst.toggled(), SortOrder::NewestFirst);
    }

    #[test]
    fn test_connection_status_labels() {
        assert_eq!(ConnectionStatus::Unknown.label(), "Checking...");
        assert_eq!(ConnectionStatus::Connected.label(), "Connected");
        assert_eq!(
            ConnectionStatus::Error("Server offline".to_string()).label(),
            "Server offline"
        );
    }

    #[test]
    fn test_draft_phase_legal_transitions() {
        use DraftPhase::*;
        assert!(Generating.can_transition(Ready));
        assert!(Generating.can_transition(Failed));
        assert!(Ready.can_transition(Confirming));
        assert!(Ready.can_transition(Generating));
        assert!(Confirming.can_transition(Sending));
        assert!(Confirming.can_transition(Ready));
        assert!(Sending.can_transition(Ready));
        assert!(Failed.can_transition(Generating));
    }

    #[test]
    fn test_draft_phase_illegal_transitions() {
        use DraftPhase::*;
        assert!(!Generating.can_transition(Confirming));
        assert!(!Generating.can_transition(Sending));
        assert!(!Ready.can_transition(Sending));
        assert!(!Sending.can_transition(Confirming));
        assert!(!Sending.can_transition(Generating));
        assert!(!Failed.can_transition(Ready));
        assert!(!Failed.can_transition(Confirming));
    }

    #[test]
    fn test_session_transition_rejects_and_keeps_phase() {
        let mut session = DraftSession::new(7, "+1555".to_string(), 1);
        assert_eq!(session.phase, DraftPhase::Generating);

        assert!(!session.transition(DraftPhase::Sending));
        assert_eq!(session.phase, DraftPhase::Generating);

        assert!(session.transition(DraftPhase::Ready));
        assert_eq!(session.phase, DraftPhase::Ready);
    }

    #[test]
    fn test_session_new_is_empty() {
        let session = DraftSession::new(7, "+15551234567".to_string(), 3);
        assert_eq!(session.chat_id, 7);
        assert_eq!(session.contact, "+15551234567");
        assert!(session.text.is_empty());
        assert_eq!(session.context_messages, None);
        assert_eq!(session.error, None);
        assert_eq!(session.epoch, 3);
    }
}
