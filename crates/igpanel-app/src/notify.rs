//! Transient notifications (toasts) and modal prompts

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use igpanel_core::ActionOutcome;

/// Styling of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn label(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic per queue; lets observers tell new toasts from old ones
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: Instant,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
            next_id: 1,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) -> &Toast {
        let toast = Toast {
            id: self.next_id,
            kind,
            message: message.into(),
            expires_at: now + self.lifetime,
        };
        self.next_id += 1;
        self.toasts.push_back(toast);
        &self.toasts[self.toasts.len() - 1]
    }

    /// One toast for an action result, styled by its success flag
    pub fn push_outcome(&mut self, outcome: &ActionOutcome, now: Instant) -> &Toast {
        let kind = if outcome.success {
            ToastKind::Success
        } else {
            ToastKind::Error
        };
        self.push(kind, outcome.message.clone(), now)
    }

    /// Drop expired toasts, returning how many went away
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        before - self.toasts.len()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Id the next pushed toast will get
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Toasts pushed with an id of at least `from`
    pub fn since(&self, from: u64) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |t| t.id >= from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Success,
    Error,
}

/// Modal message that stays until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub title: String,
    pub message: String,
}

impl Prompt {
    pub fn init_succeeded() -> Self {
        Self {
            kind: PromptKind::Success,
            title: "Initialization complete".to_string(),
            message: "All accounts are ready. Opening the dashboard...".to_string(),
        }
    }

    pub fn init_failed() -> Self {
        Self {
            kind: PromptKind::Error,
            title: "Initialization failed".to_string(),
            message: "The backend cannot work with the current accounts. Check the log above \
                      for the errors, fix the account configuration and start initialization \
                      again."
                .to_string(),
        }
    }
}
