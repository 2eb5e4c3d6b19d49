//! Toast queue: transient notifications and their lifecycle.
//!
//! The queue only tracks state. Scheduling (animation frames, auto-dismiss
//! timers, the exit fallback) belongs to the adapter, which drives the queue
//! through [`ToastQueue::reveal`], [`ToastQueue::dismiss`] and
//! [`ToastQueue::finish`].

use std::fmt;
use std::time::Duration;

use devicebox_domain::sanitize::escape_html;
use devicebox_domain::visibility::Phase;

/// Default time a toast stays on screen.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Identifier of a toast within its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u32);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Styling tag of a toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    /// Caller-supplied CSS class.
    Custom(String),
}

impl ToastKind {
    #[must_use]
    pub fn as_class(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Custom(tag) => tag,
        }
    }
}

/// Options accepted by [`ToastQueue::push`].
///
/// Without a `duration` the toast stays for the queue's default duration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub kind: ToastKind,
    pub duration: Option<Duration>,
}

impl ToastOptions {
    #[must_use]
    pub fn success(duration: Duration) -> Self {
        Self {
            kind: ToastKind::Success,
            duration: Some(duration),
        }
    }

    #[must_use]
    pub fn error(duration: Duration) -> Self {
        Self {
            kind: ToastKind::Error,
            duration: Some(duration),
        }
    }
}

/// A single notification card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    /// Raw, unescaped message.
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
    pub phase: Phase,
}

impl Toast {
    /// Message ready for `innerHTML`.
    #[must_use]
    pub fn message_html(&self) -> String {
        escape_html(&self.message)
    }

    /// CSS classes for the card in its current phase.
    #[must_use]
    pub fn class_name(&self) -> String {
        let mut class = format!("toast {}", self.kind.as_class());
        if self.phase.is_visible() {
            class.push_str(" show");
        }
        class
    }
}

/// Ordered set of live toasts, oldest first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
    default_duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_default_duration(DEFAULT_DURATION)
    }
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue whose toasts without an explicit duration stay for
    /// `default_duration`.
    #[must_use]
    pub fn with_default_duration(default_duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            default_duration,
        }
    }

    /// Insert a new toast and return its id. The toast starts in
    /// [`Phase::Inserted`] and must be revealed on the next frame.
    pub fn push(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let mut phase = Phase::default();
        phase.insert();
        let toast = Toast {
            id,
            message: message.into(),
            kind: options.kind,
            duration: options.duration.unwrap_or(self.default_duration),
            phase,
        };
        tracing::debug!(%id, kind = toast.kind.as_class(), "toast pushed");
        self.toasts.push(toast);
        id
    }

    /// Mark the toast visible.
    pub fn reveal(&mut self, id: ToastId) -> bool {
        self.get_mut(id).is_some_and(|t| t.phase.reveal())
    }

    /// Start hiding the toast. Returns `false` if it is already hiding or
    /// gone, so callers can treat repeated dismissals as no-ops.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.get_mut(id).is_some_and(|t| t.phase.hide())
    }

    /// Drop a toast whose exit transition has completed.
    pub fn finish(&mut self, id: ToastId) -> bool {
        let Some(index) = self.toasts.iter().position(|t| t.id == id) else {
            return false;
        };
        if !self.toasts[index].phase.finish() {
            return false;
        }
        self.toasts.remove(index);
        tracing::debug!(%id, "toast removed");
        true
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id == id)
    }

    /// Ids of live toasts, oldest first.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.toasts.iter().map(|t| t.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
