//! Messages for async completion delivery.
//!
//! Network actions run on spawned tasks and report back to the [`App`]
//! through these messages. Draft-related messages carry the epoch token
//! they were issued under so stale completions can be discarded.

use crate::error::ApiError;
use crate::models::{Conversation, DraftResponse, HealthReport, SendResponse};

/// Async completion delivered to the event loop.
#[derive(Debug)]
pub enum AppMessage {
    /// Startup health check finished
    HealthChecked(Result<HealthReport, ApiError>),
    /// Dual list fetch finished; `(awaiting_reply, need_reply)` on success
    ConversationsLoaded(Result<(Vec<Conversation>, Vec<Conversation>), ApiError>),
    /// Draft generation finished for the session with this epoch
    DraftGenerated {
        epoch: u64,
        result: Result<DraftResponse, ApiError>,
    },
    /// Send finished for the session with this epoch
    SendFinished {
        epoch: u64,
        result: Result<SendResponse, ApiError>,
    },
}
