//! # Core Module
//!
//! Core domain types, configuration, and error handling for the assistant bot.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Add ReminderError taxonomy and owner/reminder identifiers
//! - 1.1.0: Add response module with Discord message chunking utilities
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod error;
pub mod ids;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use error::ReminderError;
pub use ids::{OwnerId, ReminderId};
pub use response::{chunk_for_message, chunk_text, truncate_for_message, MESSAGE_LIMIT};
