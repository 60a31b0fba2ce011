//! User-facing outcome of a handled intent.

use super::{BoardError, ErrorKind};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Feedback the presentation layer shows after an operation.
///
/// Operations return notifications as values; nothing in the core pushes
/// them anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Notification {
    /// The operation committed.
    Success {
        /// Human-readable message.
        message: String,
        /// When the operation completed.
        at: DateTime<Utc>,
    },
    /// The operation was rejected and the board is unchanged.
    Failure {
        /// Failure category.
        kind: ErrorKind,
        /// Human-readable message.
        message: String,
        /// When the operation was rejected.
        at: DateTime<Utc>,
    },
}

impl Notification {
    /// Creates a success notification stamped with the clock's current time.
    #[must_use]
    pub fn success(message: impl Into<String>, clock: &impl Clock) -> Self {
        Self::Success {
            message: message.into(),
            at: clock.utc(),
        }
    }

    /// Creates a failure notification describing `error`.
    #[must_use]
    pub fn failure(error: &BoardError, clock: &impl Clock) -> Self {
        Self::Failure {
            kind: error.kind(),
            message: error.to_string(),
            at: clock.utc(),
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }

    /// Returns whether this notification reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the failure kind, if this is a failure.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}
