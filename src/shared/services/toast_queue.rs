//! Transient notifications waiting to be shown by the toast zone.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::logging::log_toast_pushed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Info => "ℹ️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first. Never holds more than `max_visible`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            max_visible: max_visible.max(1),
        }
    }

    /// Queue a toast, evicting the oldest ones past the limit
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.push_back(toast);

        let mut evicted = 0;
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
            evicted += 1;
        }

        if let Some(last) = self.toasts.back() {
            log_toast_pushed(kind.as_str(), &last.message, evicted);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(crate::config::ToastConfig::default().max_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::new(3);
        let saved = queue.push(ToastKind::Success, "Saved");
        let failed = queue.push(ToastKind::Error, "Failed");
        assert_eq!(queue.len(), 2);

        assert!(queue.dismiss(saved));
        assert!(!queue.dismiss(saved));
        let remaining: Vec<_> = queue.iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![failed]);
    }

    #[test]
    fn test_oldest_evicted_past_limit() {
        let mut queue = ToastQueue::new(2);
        queue.push(ToastKind::Info, "one");
        queue.push(ToastKind::Info, "two");
        queue.push(ToastKind::Info, "three");

        let messages: Vec<_> = queue.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["two", "three"]);
    }

    #[test]
    fn test_zero_limit_still_shows_latest() {
        let mut queue = ToastQueue::new(0);
        queue.push(ToastKind::Info, "first");
        queue.push(ToastKind::Info, "second");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().map(|t| t.message.as_str()), Some("second"));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Info, "same");
        let b = queue.push(ToastKind::Info, "same");
        assert_ne!(a, b);
    }
}
