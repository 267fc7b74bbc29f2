use std::time::{Duration, Instant};

/// Kind of notification to display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

impl NotificationKind {
    fn timeout(&self) -> Duration {
        match self {
            NotificationKind::Info => Duration::from_secs(4),
            NotificationKind::Error => Duration::from_secs(10),
        }
    }
}

/// A transient message shown to the user (success or error), with
/// auto-dismiss after a kind-dependent timeout.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: Instant,
}

impl Notification {
    /// Success/informational notification, dismissed after 4s.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    /// Error notification, dismissed after 10s.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            timestamp: Instant::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    /// Check if this notification should be auto-dismissed
    pub fn should_dismiss(&self) -> bool {
        self.timestamp.elapsed() > self.kind.timeout()
    }
}
