//! # Conversation Feature
//!
//! Multi-step input collection ("pick a time" → "enter the text") per user.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod machine;
pub mod session;

pub use machine::{ConversationMachine, Outcome, SessionStore};
pub use session::{Action, Input, Prompt, SessionState, Step};
