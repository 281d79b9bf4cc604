//! Transient toast notifications.
//!
//! The stack is component-local state: pushing past the visible bound
//! evicts the oldest toast, and each toast carries its own expiry deadline
//! consumed by [`ToastStack::expire`]. No timers live here.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Short heading (e.g. "Success", "Stock").
    pub title: String,
    /// Message body.
    pub body: String,
    /// When this toast stops being visible.
    pub expires_at: Instant,
}

/// A bounded stack of toasts, oldest first.
#[derive(Debug)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
    capacity: usize,
    ttl: Duration,
}

impl ToastStack {
    /// Create a stack showing at most `capacity` toasts, each visible for
    /// `ttl`.
    #[must_use]
    pub const fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            capacity,
            ttl,
        }
    }

    /// Show a toast, evicting the oldest one if the stack is full.
    pub fn push(&mut self, title: impl Into<String>, body: impl Into<String>, now: Instant) {
        while self.toasts.len() >= self.capacity.max(1) {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            title: title.into(),
            body: body.into(),
            expires_at: now + self.ttl,
        });
    }

    /// Drop every toast whose deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    /// Currently visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Number of visible toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> ToastStack {
        ToastStack::new(3, Duration::from_secs(3))
    }

    #[test]
    fn test_push_past_capacity_evicts_oldest() {
        let mut toasts = stack();
        let now = Instant::now();

        for n in 0..4 {
            toasts.push("Title", format!("message {n}"), now);
        }

        assert_eq!(toasts.len(), 3);
        let bodies: Vec<_> = toasts.visible().map(|t| t.body.as_str()).collect();
        assert_eq!(bodies, ["message 1", "message 2", "message 3"]);
    }

    #[test]
    fn test_expire_drops_only_dead_toasts() {
        let mut toasts = stack();
        let start = Instant::now();

        toasts.push("Old", "first", start);
        let later = start + Duration::from_secs(2);
        toasts.push("New", "second", later);

        toasts.expire(start + Duration::from_millis(3500));
        let remaining: Vec<_> = toasts.visible().map(|t| t.title.as_str()).collect();
        assert_eq!(remaining, ["New"]);

        toasts.expire(later + Duration::from_secs(4));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_zero_capacity_still_shows_latest() {
        let mut toasts = ToastStack::new(0, Duration::from_secs(1));
        let now = Instant::now();
        toasts.push("A", "a", now);
        toasts.push("B", "b", now);
        assert_eq!(toasts.len(), 1);
    }
}
