//! Status Bar State

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Kind of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Operation started/in progress
    Running,
    /// Operation completed successfully
    Success,
    /// Operation failed with error
    Error,
}

impl StatusKind {
    /// Get the emoji for this status kind
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
        }
    }
}

/// A single status message with metadata
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// When the message was created
    pub timestamp: DateTime<Local>,
    /// Type of status
    pub kind: StatusKind,
    /// The message text
    pub message: String,
    /// The operation that triggered this message
    pub source: String,
}

impl StatusMessage {
    /// Create a new status message with current timestamp
    pub fn new(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source: source.into(),
        }
    }
}

/// Status bar state - history of messages
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// Message history (newest at back)
    pub messages: VecDeque<StatusMessage>,
    /// Maximum messages to keep
    pub max_history: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::with_max_history(100)
    }
}

impl StatusBarState {
    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: max_history.max(1),
        }
    }

    /// Get the latest message (if any)
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Push a new message, trimming oldest if over limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        while self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }
}
