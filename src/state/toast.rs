//! Transient notifications

use std::time::{Duration, Instant};

/// How long a toast stays on screen unless configured otherwise
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single notification and when it appeared
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    /// Check if the toast has outlived `ttl` as of `now`
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}

/// Visible toasts, oldest first
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Success, message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(ToastKind::Error, message));
    }

    /// Drop toasts that have been visible longer than the configured duration
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    pub fn prune_at(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts.retain(|t| !t.is_expired_at(now, ttl));
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}
