// Core layer - shared types and configuration
pub mod core;

// Features layer - reminders, auto-replies and the conversation flow
pub mod features;

// Process-wide state and the operations the adapter calls
pub mod assistant;

// Application layer
pub mod command_handler;
pub mod commands;

#[cfg(test)]
pub(crate) mod testing;

pub use assistant::{Assistant, AssistantState};
pub use core::Config;

// Re-export feature items
pub use features::{
    // Auto-reply
    AutoReplyPolicy, ResponsePool,
    // Conversation
    ConversationMachine, Input, Outcome,
    // Reminders
    DelayClass, DiscordNotifier, Notifier, Reminder, ReminderScheduler,
};
