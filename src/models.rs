//! Wire types for the triage backend API.
//!
//! These mirror the JSON bodies exchanged with the backend: the health
//! report, the conversation summaries returned by the two list endpoints,
//! and the draft-generation and send request/response pairs.

use serde::{Deserialize, Serialize};

/// Which triage list a conversation belongs to.
///
/// The two lists carry different urgency thresholds: a counterpart waiting
/// on the user becomes urgent after a day, while a conversation the user is
/// waiting on is only flagged after three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// The other party sent the last message; the user owes a reply.
    NeedReply,
    /// The user sent the last message and is waiting on the other party.
    AwaitingReply,
}

/// A conversation summary as returned by the list endpoints.
///
/// Immutable once fetched; every refresh replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Backend chat identifier
    pub chat_id: i64,
    /// Contact handle (phone number or address)
    pub contact: String,
    /// Resolved display name, when the address book has one
    #[serde(default)]
    pub contact_name: Option<String>,
    /// Preview of the last message (pre-truncated by the backend)
    pub last_message: String,
    /// Hours since the last activity. The backend rounds to tenths, so
    /// this is a float on the wire.
    pub hours_ago: f64,
    /// Whether the chat has more than one participant
    #[serde(default)]
    pub is_group: bool,
    /// Number of context messages available for draft generation
    #[serde(default)]
    pub context_count: u32,
}

impl Conversation {
    /// The name to show for this conversation: the resolved contact name
    /// when available, otherwise the raw handle.
    pub fn display_name(&self) -> &str {
        self.contact_name.as_deref().unwrap_or(&self.contact)
    }

    /// Whether this conversation crosses the urgency threshold for the
    /// list it is shown in (> 24h for needs-reply, > 72h for awaiting).
    pub fn is_urgent(&self, list: ListKind) -> bool {
        match list {
            ListKind::NeedReply => self.hours_ago > 24.0,
            ListKind::AwaitingReply => self.hours_ago > 72.0,
        }
    }
}

/// Response body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthReport {
    /// Whether the backend has an API key for draft generation
    pub api_key_configured: bool,
    /// Whether the backend can read the message database
    pub database_accessible: bool,
    /// Server-side default staleness threshold, in hours
    pub stale_threshold_hours: u32,
}

/// Request body of `POST /api/generate-draft`.
#[derive(Debug, Clone, Serialize)]
pub struct DraftRequest {
    pub chat_id: i64,
    pub contact: String,
}

/// Response body of `POST /api/generate-draft`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DraftResponse {
    /// The generated reply text
    pub draft: String,
    /// How many prior messages informed the draft
    pub context_messages: u32,
}

/// Request body of `POST /api/send-message`.
#[derive(Debug, Clone, Serialize)]
pub struct SendRequest {
    pub recipient: String,
    pub message: String,
}

/// Response body of `POST /api/send-message`.
///
/// The backend reports delivery failures in-band rather than with an HTTP
/// error status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SendResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error payload shape used by the backend for non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
