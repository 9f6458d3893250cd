//! # Reminders Feature
//!
//! Volatile, per-user reminders with fixed lead times, delivered by DM.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: In-memory store with per-reminder timer jobs, delay classes, cancel-all
//! - 1.0.0: Initial release

pub mod delay;
pub mod notifier;
pub mod scheduler;
pub mod store;
pub mod timer;

pub use delay::DelayClass;
pub use notifier::{DiscordNotifier, Notifier};
pub use scheduler::{format_fired, ReminderScheduler, ReminderSummary};
pub use store::{Reminder, ReminderStore};
pub use timer::{Clock, FireFuture, JobHandle, SystemClock, TimerFacility, TokioTimer};
