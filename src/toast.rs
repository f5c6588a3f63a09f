//! Ephemeral status messages.
//!
//! One toast is shown at a time on the bottom line of the UI and is
//! dismissed automatically by the event-loop tick once its TTL elapses.
//! A new toast replaces the current one immediately.

use std::time::{Duration, Instant};

/// How long a toast stays visible.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient status message with its creation time.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            created: Instant::now(),
        }
    }

    /// Whether the TTL has elapsed.
    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= TOAST_TTL
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        }
    }

    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.created -= by;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_not_expired() {
        let toast = Toast::success("Message sent successfully!");
        assert!(!toast.is_expired());
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.icon(), "✓");
    }

    #[test]
    fn test_toast_expires_after_ttl() {
        let mut toast = Toast::error("Server offline");
        assert!(!toast.is_expired());
        toast.backdate(TOAST_TTL);
        assert!(toast.is_expired());
        assert_eq!(toast.icon(), "✗");
    }
}
