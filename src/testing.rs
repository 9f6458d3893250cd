//! Shared test doubles

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::sync::Mutex;

use crate::core::OwnerId;
use crate::features::reminders::{Clock, Notifier};

/// Clock frozen at one instant
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn at_startup() -> Self {
        FixedClock(Local::now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Records every send; optionally fails each one
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(OwnerId, String)>>,
    attempts: Mutex<usize>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        RecordingNotifier {
            fail: true,
            ..Default::default()
        }
    }

    /// Successfully delivered messages
    pub fn sent(&self) -> Vec<(OwnerId, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, owner: OwnerId, text: &str) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail {
            return Err(anyhow::anyhow!("Unknown User"));
        }
        self.sent.lock().unwrap().push((owner, text.to_string()));
        Ok(())
    }
}
