//! Reminder scheduler
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: One timer job per reminder instead of a polling loop; cancel-all
//! - 1.0.0: Initial release
//!
//! The scheduler is the only place timer jobs are created or cancelled.
//! Firing is at-most-once: a reminder is consumed whether or not the DM
//! went through.

use log::{debug, info, warn};
use std::sync::Arc;

use super::delay::DelayClass;
use super::notifier::Notifier;
use super::store::{Reminder, ReminderStore};
use super::timer::{Clock, TimerFacility};
use crate::core::{OwnerId, ReminderError, ReminderId};

/// A reminder prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSummary {
    pub id: ReminderId,
    pub text: String,
    pub delay: DelayClass,
    pub minutes_remaining: i64,
}

#[derive(Clone)]
pub struct ReminderScheduler {
    store: ReminderStore,
    timer: Arc<dyn TimerFacility>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    max_per_user: Option<usize>,
}

/// Text of the message delivered when a reminder fires
pub fn format_fired(reminder: &Reminder) -> String {
    format!("⏰ Reminder: {}", reminder.text)
}

impl ReminderScheduler {
    pub fn new(
        store: ReminderStore,
        timer: Arc<dyn TimerFacility>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        ReminderScheduler {
            store,
            timer,
            clock,
            notifier,
            max_per_user: None,
        }
    }

    /// Cap the number of active reminders a single user may hold
    pub fn with_max_per_user(mut self, limit: usize) -> Self {
        self.max_per_user = Some(limit);
        self
    }

    pub fn store(&self) -> &ReminderStore {
        &self.store
    }

    /// Store a reminder and arm its timer.
    ///
    /// Never blocks; the only work deferred is the fire callback.
    pub fn schedule(
        &self,
        owner: OwnerId,
        text: &str,
        delay: DelayClass,
    ) -> Result<Reminder, ReminderError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ReminderError::EmptyReminderText);
        }

        let reminder = Reminder::new(owner, text.to_string(), delay, self.clock.now());
        let id = reminder.id;
        let at = reminder.scheduled_at;

        self.store.add(reminder.clone(), self.max_per_user, |_| {
            let scheduler = self.clone();
            self.timer
                .schedule_at(at, Box::pin(async move { scheduler.fire(owner, id).await }))
        })?;

        info!(
            "Created reminder {} for user {} in {} (at {})",
            id.short(),
            owner,
            delay,
            at.format("%Y-%m-%d %H:%M:%S")
        );
        Ok(reminder)
    }

    /// Parse the delay token first so an unknown alias changes nothing
    pub fn schedule_str(
        &self,
        owner: OwnerId,
        text: &str,
        delay: &str,
    ) -> Result<Reminder, ReminderError> {
        let delay = DelayClass::parse(delay)?;
        self.schedule(owner, text, delay)
    }

    /// Fire callback run by the timer
    async fn fire(&self, owner: OwnerId, id: ReminderId) {
        // Claiming under the store lock is what loses the race against cancel_all
        let Some(reminder) = self.store.claim(owner, id) else {
            debug!("Reminder {} for user {} was cancelled, not firing", id.short(), owner);
            return;
        };

        match self.notifier.send(owner, &format_fired(&reminder)).await {
            Ok(()) => info!("Delivered reminder {} to user {}", id.short(), owner),
            Err(e) => {
                let err = ReminderError::NotifyDeliveryFailed {
                    owner,
                    reason: e.to_string(),
                };
                warn!("Reminder {}: {}", id.short(), err);
            }
        }

        self.store.remove_by_predicate(owner, |r| r.id == id);
    }

    /// Active reminders of a user with minutes left
    pub fn list(&self, owner: OwnerId) -> Vec<ReminderSummary> {
        let now = self.clock.now();
        self.store
            .list_active(owner)
            .into_iter()
            .map(|r| ReminderSummary {
                minutes_remaining: r.minutes_remaining(now),
                id: r.id,
                text: r.text,
                delay: r.delay,
            })
            .collect()
    }

    /// Cancel every pending reminder of a user. Returns how many were
    /// cancelled; calling it again returns 0.
    pub fn cancel_all(&self, owner: OwnerId) -> usize {
        let cancelled = self.store.clear(owner);
        if cancelled > 0 {
            info!("Cancelled {cancelled} reminder(s) for user {owner}");
        }
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reminders::timer::TokioTimer;
    use crate::testing::{FixedClock, RecordingNotifier};
    use std::time::Duration;

    const USER: OwnerId = OwnerId(1);

    fn scheduler(notifier: Arc<RecordingNotifier>) -> (ReminderScheduler, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::at_startup());
        let scheduler = ReminderScheduler::new(
            ReminderStore::new(),
            Arc::new(TokioTimer::new(clock.clone())),
            clock.clone(),
            notifier,
        );
        (scheduler, clock)
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_computes_exact_deadline() {
        let (scheduler, _) = scheduler(Arc::new(RecordingNotifier::default()));
        for class in DelayClass::ALL {
            let r = scheduler.schedule(USER, "tick", class).unwrap();
            assert_eq!(r.scheduled_at, r.created_at + class.duration());
            assert_eq!(r.delay.label(), class.label());
        }
        assert_eq!(scheduler.list(USER).len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_reports_minutes_left() {
        let (scheduler, _) = scheduler(Arc::new(RecordingNotifier::default()));
        scheduler.schedule(USER, "Call John", DelayClass::FiveMinutes).unwrap();

        let list = scheduler.list(USER);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].text, "Call John");
        assert!((0..=5).contains(&list[0].minutes_remaining));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_text_rejected() {
        let (scheduler, _) = scheduler(Arc::new(RecordingNotifier::default()));
        assert_eq!(
            scheduler.schedule(USER, "   ", DelayClass::TenMinutes),
            Err(ReminderError::EmptyReminderText)
        );
        assert!(scheduler.list(USER).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_alias_leaves_state_untouched() {
        let (scheduler, _) = scheduler(Arc::new(RecordingNotifier::default()));
        scheduler.schedule(USER, "existing", DelayClass::OneHour).unwrap();

        let err = scheduler.schedule_str(USER, "x", "7min").unwrap_err();
        assert_eq!(err, ReminderError::InvalidDelayClass("7min".into()));
        assert_eq!(scheduler.list(USER).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_alias_matches_canonical() {
        let (scheduler, _) = scheduler(Arc::new(RecordingNotifier::default()));
        let alias = scheduler.schedule_str(OwnerId(4), "x", "60m").unwrap();
        let canonical = scheduler.schedule_str(OwnerId(4), "x", "1h").unwrap();
        assert_eq!(alias.delay, canonical.delay);
        assert_eq!(alias.scheduled_at, canonical.scheduled_at);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fire_delivers_and_consumes() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (scheduler, _) = scheduler(notifier.clone());
        scheduler.schedule(USER, "Stretch", DelayClass::FiveMinutes).unwrap();

        tokio::time::sleep(Duration::from_secs(5 * 60 + 1)).await;

        assert_eq!(notifier.sent(), vec![(USER, "⏰ Reminder: Stretch".to_string())]);
        assert!(scheduler.list(USER).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_delivery_still_consumes() {
        let notifier = Arc::new(RecordingNotifier::failing());
        let (scheduler, _) = scheduler(notifier.clone());
        scheduler.schedule(USER, "Unreachable", DelayClass::FiveMinutes).unwrap();

        tokio::time::sleep(Duration::from_secs(5 * 60 + 1)).await;

        assert_eq!(notifier.attempts(), 1);
        assert!(scheduler.list(USER).is_empty());

        // never retried
        tokio::time::sleep(Duration::from_secs(60 * 60)).await;
        assert_eq!(notifier.attempts(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_is_idempotent_and_silences_timers() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (scheduler, _) = scheduler(notifier.clone());
        scheduler.schedule(USER, "one", DelayClass::FiveMinutes).unwrap();
        scheduler.schedule(USER, "two", DelayClass::TenMinutes).unwrap();

        assert_eq!(scheduler.cancel_all(USER), 2);
        assert_eq!(scheduler.cancel_all(USER), 0);

        tokio::time::sleep(Duration::from_secs(11 * 60)).await;
        assert_eq!(notifier.attempts(), 0);
        assert!(scheduler.list(USER).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_without_reminders() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (scheduler, _) = scheduler(notifier.clone());
        assert_eq!(scheduler.cancel_all(OwnerId(3)), 0);
        assert_eq!(notifier.attempts(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_instant_reminders_fire_independently() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (scheduler, _) = scheduler(notifier.clone());
        scheduler.schedule(USER, "same", DelayClass::FiveMinutes).unwrap();
        scheduler.schedule(USER, "same", DelayClass::FiveMinutes).unwrap();

        tokio::time::sleep(Duration::from_secs(5 * 60 + 1)).await;
        assert_eq!(notifier.attempts(), 2);
        assert!(scheduler.list(USER).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_users_are_isolated() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (scheduler, _) = scheduler(notifier.clone());
        scheduler.schedule(OwnerId(1), "mine", DelayClass::FiveMinutes).unwrap();
        scheduler.schedule(OwnerId(2), "yours", DelayClass::FiveMinutes).unwrap();

        assert_eq!(scheduler.cancel_all(OwnerId(1)), 1);
        tokio::time::sleep(Duration::from_secs(5 * 60 + 1)).await;
        assert_eq!(notifier.sent(), vec![(OwnerId(2), "⏰ Reminder: yours".to_string())]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quota_enforced() {
        let (scheduler, _) = scheduler(Arc::new(RecordingNotifier::default()));
        let scheduler = scheduler.with_max_per_user(2);
        scheduler.schedule(USER, "a", DelayClass::FiveMinutes).unwrap();
        scheduler.schedule(USER, "b", DelayClass::FiveMinutes).unwrap();
        assert_eq!(
            scheduler.schedule(USER, "c", DelayClass::FiveMinutes),
            Err(ReminderError::QuotaExceeded { limit: 2 })
        );
        assert_eq!(scheduler.list(USER).len(), 2);
    }
}
