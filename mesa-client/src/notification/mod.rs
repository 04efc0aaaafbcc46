//! Ephemeral notifications
//!
//! An ordered, process-wide list of short-lived messages used to surface
//! operation outcomes. Each entry expires on its own timer unless its
//! timeout is zero or negative.

mod queue;
mod scheduler;

pub use queue::NotificationQueue;
pub use scheduler::{ManualScheduler, Scheduler, Task, TokioScheduler};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Timeout applied when the caller does not pick one
pub const DEFAULT_TIMEOUT_MS: i64 = 5000;

/// Visual category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-ordered notification identifier (UUID v7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A message waiting to be displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Milliseconds before auto-removal; `<= 0` never expires
    #[serde(rename = "timeout")]
    pub timeout_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, timeout_ms: i64) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            kind,
            timeout_ms,
            created_at: Utc::now(),
        }
    }

    pub fn expires(&self) -> bool {
        self.timeout_ms > 0
    }
}

/// Change broadcast to queue subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueEvent {
    Added(Notification),
    Removed(NotificationId),
    Cleared,
}
