//! API client for the triage backend.
//!
//! Wraps the five backend endpoints behind typed methods. The client is
//! generic over [`HttpClient`] so tests can drive it with the mock adapter.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{
    Conversation, DraftRequest, DraftResponse, ErrorBody, HealthReport, SendRequest, SendResponse,
};
use crate::traits::{Headers, HttpClient, Response};

/// Staleness threshold bounds, in hours.
pub const THRESHOLD_MIN: i64 = 0;
pub const THRESHOLD_MAX: i64 = 720;

/// Client for the triage backend API.
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl ApiClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Clamp a user-supplied threshold to the accepted range.
    pub fn clamp_threshold(threshold: i64) -> i64 {
        threshold.clamp(THRESHOLD_MIN, THRESHOLD_MAX)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    /// Build an [`ApiError::Server`] from a non-2xx response, preferring
    /// the backend's `detail` message over the supplied fallback.
    fn server_error(response: &Response, fallback: &str) -> ApiError {
        let detail = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| fallback.to_string());
        ApiError::Server {
            status: response.status,
            detail,
        }
    }

    /// Fetch the backend health report.
    pub async fn health(&self) -> Result<HealthReport, ApiError> {
        let response = self
            .http
            .get(&self.url("/api/health"), &Headers::new())
            .await?;
        if !response.is_success() {
            return Err(Self::server_error(&response, "Health check failed"));
        }
        Ok(response.json()?)
    }

    /// Fetch both triage lists concurrently with the same threshold.
    ///
    /// Returns `(awaiting_reply, need_reply)`. Only the awaiting-reply
    /// response's status is checked before parsing; a failed need-to-reply
    /// response surfaces as a parse error instead of a server error.
    pub async fn fetch_lists(
        &self,
        threshold: i64,
    ) -> Result<(Vec<Conversation>, Vec<Conversation>), ApiError> {
        let threshold = Self::clamp_threshold(threshold);
        let awaiting_url = format!("{}?threshold={}", self.url("/api/conversations"), threshold);
        let need_url = format!("{}?threshold={}", self.url("/api/need-to-reply"), threshold);

        let headers = Headers::new();
        let (awaiting, need) = futures::join!(
            self.http.get(&awaiting_url, &headers),
            self.http.get(&need_url, &headers)
        );
        let awaiting = awaiting?;
        let need = need?;

        if !awaiting.is_success() {
            return Err(Self::server_error(&awaiting, "Failed to load conversations"));
        }

        let awaiting: Vec<Conversation> = awaiting.json()?;
        let need: Vec<Conversation> = need.json()?;
        Ok((awaiting, need))
    }

    /// Generate a draft reply for a conversation.
    pub async fn generate_draft(
        &self,
        chat_id: i64,
        contact: &str,
    ) -> Result<DraftResponse, ApiError> {
        let request = DraftRequest {
            chat_id,
            contact: contact.to_string(),
        };
        let body = serde_json::to_string(&request)?;
        let response = self
            .http
            .post(&self.url("/api/generate-draft"), &body, &Self::json_headers())
            .await?;
        if !response.is_success() {
            return Err(Self::server_error(&response, "Failed to generate draft"));
        }
        Ok(response.json()?)
    }

    /// Send a message.
    ///
    /// Delivery failures are reported in-band (`success: false`) and mapped
    /// to [`ApiError::Rejected`]; the body is parsed regardless of status.
    pub async fn send_message(
        &self,
        recipient: &str,
        message: &str,
    ) -> Result<SendResponse, ApiError> {
        let request = SendRequest {
            recipient: recipient.to_string(),
            message: message.to_string(),
        };
        let body = serde_json::to_string(&request)?;
        let response = self
            .http
            .post(&self.url("/api/send-message"), &body, &Self::json_headers())
            .await?;

        let result: SendResponse = response.json()?;
        if !result.success {
            let message = result
                .error
                .unwrap_or_else(|| "Failed to send message".to_string());
            return Err(ApiError::Rejected(message));
        }
        Ok(result)
    }
}
