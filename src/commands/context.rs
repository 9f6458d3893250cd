//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::time::{Duration, Instant};

use crate::assistant::Assistant;

/// Services shared by all command handlers
#[derive(Clone)]
pub struct CommandContext {
    pub assistant: Assistant,
    pub start_time: Instant,
}

impl CommandContext {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            assistant,
            start_time: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Human-readable uptime such as `2h 5m` or `45s`
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let (days, hours, mins) = (secs / 86400, (secs % 86400) / 3600, (secs % 3600) / 60);
    if days > 0 {
        format!("{days}d {hours}h {mins}m")
    } else if hours > 0 {
        format!("{hours}h {mins}m")
    } else if mins > 0 {
        format!("{mins}m")
    } else {
        format!("{secs}s")
    }
}
