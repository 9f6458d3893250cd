//! Reminder and conversation error taxonomy
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.2.0
//!
//! None of these errors are fatal. Each is handled where it happens:
//! invalid input is answered with a re-prompt, delivery failures are logged.

use thiserror::Error;

use super::ids::OwnerId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReminderError {
    /// The delay token did not match any known delay class or alias
    #[error("unknown reminder time '{0}'")]
    InvalidDelayClass(String),

    #[error("reminder text is empty")]
    EmptyReminderText,

    #[error("auto-reply text is empty")]
    EmptyAutoReplyText,

    /// The owner already has the maximum number of active reminders
    #[error("reminder limit of {limit} reached")]
    QuotaExceeded { limit: usize },

    /// Outbound send failed while firing; the reminder is consumed anyway
    #[error("failed to deliver reminder to {owner}: {reason}")]
    NotifyDeliveryFailed { owner: OwnerId, reason: String },
}
