//! # Auto-Reply Feature
//!
//! Answers plain messages with the user's custom text or a canned response.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//! - **Toggleable**: true

pub mod policy;
pub mod pool;

pub use policy::{AutoReplyPolicy, AutoReplyStore};
pub use pool::ResponsePool;
