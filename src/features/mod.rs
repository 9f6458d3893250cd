//! # Features
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.7.0
//!
//! ## Changelog
//! - 1.1.0: Add conversation and auto-reply features
//! - 1.0.0: Reminders extracted into a feature module

pub mod auto_reply;
pub mod conversation;
pub mod reminders;

pub use auto_reply::{AutoReplyPolicy, AutoReplyStore, ResponsePool};
pub use conversation::{ConversationMachine, Input, Outcome, Prompt, SessionState, SessionStore};
pub use reminders::{
    DelayClass, DiscordNotifier, Notifier, Reminder, ReminderScheduler, ReminderStore,
    ReminderSummary,
};
