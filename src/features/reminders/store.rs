//! Per-user reminder storage
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Entries own their timer job; removal cancels it
//! - 1.0.0: Initial in-memory store
//!
//! Each entry carries the [`JobHandle`] of the timer that will fire it. An
//! entry whose job has been taken is being delivered right now and can no
//! longer be cancelled.

use chrono::{DateTime, Local};
use dashmap::DashMap;
use std::sync::Arc;

use super::delay::DelayClass;
use super::timer::JobHandle;
use crate::core::{OwnerId, ReminderError, ReminderId};

/// A scheduled reminder as seen by callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: ReminderId,
    pub owner: OwnerId,
    pub text: String,
    pub delay: DelayClass,
    pub created_at: DateTime<Local>,
    pub scheduled_at: DateTime<Local>,
}

impl Reminder {
    pub fn new(owner: OwnerId, text: String, delay: DelayClass, now: DateTime<Local>) -> Self {
        Reminder {
            id: ReminderId::new(),
            owner,
            text,
            delay,
            created_at: now,
            scheduled_at: now + delay.duration(),
        }
    }

    /// Whole minutes until the reminder fires, never negative
    pub fn minutes_remaining(&self, now: DateTime<Local>) -> i64 {
        (self.scheduled_at - now).num_minutes().max(0)
    }
}

#[derive(Debug)]
struct Entry {
    reminder: Reminder,
    job: Option<JobHandle>,
}

#[derive(Clone, Default)]
pub struct ReminderStore {
    entries: Arc<DashMap<OwnerId, Vec<Entry>>>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active reminders of one owner in insertion order
    pub fn list_active(&self, owner: OwnerId) -> Vec<Reminder> {
        self.entries
            .get(&owner)
            .map(|list| list.iter().map(|e| e.reminder.clone()).collect())
            .unwrap_or_default()
    }

    pub fn count(&self, owner: OwnerId) -> usize {
        self.entries.get(&owner).map(|list| list.len()).unwrap_or(0)
    }

    /// Append a reminder and arm its job while the owner's list is locked.
    ///
    /// `arm` runs only if the reminder is accepted, so a rejected reminder
    /// never leaves a job behind.
    pub(crate) fn add<F>(
        &self,
        reminder: Reminder,
        limit: Option<usize>,
        arm: F,
    ) -> Result<ReminderId, ReminderError>
    where
        F: FnOnce(&Reminder) -> JobHandle,
    {
        let owner = reminder.owner;
        let result = {
            let mut list = self.entries.entry(owner).or_default();
            match limit {
                Some(limit) if list.len() >= limit => Err(ReminderError::QuotaExceeded { limit }),
                _ => {
                    let job = arm(&reminder);
                    let id = reminder.id;
                    list.push(Entry {
                        reminder,
                        job: Some(job),
                    });
                    Ok(id)
                }
            }
        };
        self.prune(owner);
        result
    }

    /// Take the job of a due reminder so it can be delivered.
    ///
    /// Returns `None` when the reminder is gone, already claimed, or its job
    /// was cancelled. A claimed reminder stays listed until removed.
    pub(crate) fn claim(&self, owner: OwnerId, id: ReminderId) -> Option<Reminder> {
        let mut list = self.entries.get_mut(&owner)?;
        let pos = list.iter().position(|e| e.reminder.id == id)?;
        let job = list[pos].job.take()?;
        if job.is_cancelled() {
            list.remove(pos);
            return None;
        }
        Some(list[pos].reminder.clone())
    }

    /// Remove every matching reminder, cancelling jobs that are still armed.
    /// Returns how many entries were removed.
    pub(crate) fn remove_by_predicate<F>(&self, owner: OwnerId, predicate: F) -> usize
    where
        F: Fn(&Reminder) -> bool,
    {
        let removed = match self.entries.get_mut(&owner) {
            Some(mut list) => {
                let before = list.len();
                list.retain(|entry| {
                    if !predicate(&entry.reminder) {
                        return true;
                    }
                    if let Some(job) = &entry.job {
                        job.cancel();
                    }
                    false
                });
                before - list.len()
            }
            None => 0,
        };
        self.prune(owner);
        removed
    }

    /// Drop all of an owner's reminders. Returns the number of armed jobs
    /// that were cancelled; reminders already being delivered are dropped
    /// without being counted.
    pub(crate) fn clear(&self, owner: OwnerId) -> usize {
        let Some((_, entries)) = self.entries.remove(&owner) else {
            return 0;
        };
        entries
            .into_iter()
            .filter_map(|entry| entry.job)
            .map(|job| job.cancel())
            .count()
    }

    /// Forget owners with no reminders left. Must not be called while a
    /// guard on the same owner is held.
    fn prune(&self, owner: OwnerId) {
        self.entries.remove_if(&owner, |_, list| list.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    const OWNER: OwnerId = OwnerId(1);

    fn reminder(text: &str) -> Reminder {
        Reminder::new(OWNER, text.to_string(), DelayClass::FiveMinutes, Local::now())
    }

    fn armed(flags: &mut Vec<Arc<AtomicBool>>) -> impl FnOnce(&Reminder) -> JobHandle + '_ {
        move |_| {
            let flag = Arc::new(AtomicBool::new(false));
            flags.push(Arc::clone(&flag));
            JobHandle::new(flag, None)
        }
    }

    #[test]
    fn test_scheduled_at_is_created_plus_duration() {
        let now = Local::now();
        for class in DelayClass::ALL {
            let r = Reminder::new(OWNER, "x".into(), class, now);
            assert_eq!(r.scheduled_at, r.created_at + class.duration());
        }
    }

    #[test]
    fn test_minutes_remaining_clamps_at_zero() {
        let now = Local::now();
        let r = Reminder::new(OWNER, "x".into(), DelayClass::TenMinutes, now);
        assert_eq!(r.minutes_remaining(now), 10);
        assert_eq!(r.minutes_remaining(now + chrono::Duration::seconds(90)), 8);
        assert_eq!(r.minutes_remaining(now + chrono::Duration::hours(2)), 0);
    }

    #[test]
    fn test_add_and_list_in_insertion_order() {
        let store = ReminderStore::new();
        let mut flags = Vec::new();
        store.add(reminder("first"), None, armed(&mut flags)).unwrap();
        store.add(reminder("second"), None, armed(&mut flags)).unwrap();

        let texts: Vec<String> = store.list_active(OWNER).into_iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(store.count(OWNER), 2);
        assert!(store.list_active(OwnerId(2)).is_empty());
    }

    #[test]
    fn test_quota_rejects_without_arming() {
        let store = ReminderStore::new();
        let mut flags = Vec::new();
        store.add(reminder("a"), Some(1), armed(&mut flags)).unwrap();

        let mut armed_calls = 0;
        let result = store.add(reminder("b"), Some(1), |_| {
            armed_calls += 1;
            JobHandle::new(Arc::new(AtomicBool::new(false)), None)
        });
        assert_eq!(result, Err(ReminderError::QuotaExceeded { limit: 1 }));
        assert_eq!(armed_calls, 0);
        assert_eq!(store.count(OWNER), 1);
    }

    #[test]
    fn test_remove_by_predicate_cancels_jobs() {
        let store = ReminderStore::new();
        let mut flags = Vec::new();
        let keep = store.add(reminder("keep"), None, armed(&mut flags)).unwrap();
        store.add(reminder("drop"), None, armed(&mut flags)).unwrap();

        let removed = store.remove_by_predicate(OWNER, |r| r.text == "drop");
        assert_eq!(removed, 1);
        assert!(!flags[0].load(Ordering::SeqCst));
        assert!(flags[1].load(Ordering::SeqCst));
        assert_eq!(store.list_active(OWNER)[0].id, keep);
    }

    #[test]
    fn test_claim_is_one_shot() {
        let store = ReminderStore::new();
        let mut flags = Vec::new();
        let id = store.add(reminder("once"), None, armed(&mut flags)).unwrap();

        assert!(store.claim(OWNER, id).is_some());
        assert!(store.claim(OWNER, id).is_none());
        // still listed until the fire path removes it
        assert_eq!(store.count(OWNER), 1);
    }

    #[test]
    fn test_clear_counts_only_armed_jobs() {
        let store = ReminderStore::new();
        let mut flags = Vec::new();
        let firing = store.add(reminder("firing"), None, armed(&mut flags)).unwrap();
        store.add(reminder("pending"), None, armed(&mut flags)).unwrap();
        store.claim(OWNER, firing).unwrap();

        assert_eq!(store.clear(OWNER), 1);
        assert!(flags[1].load(Ordering::SeqCst));
        assert!(store.list_active(OWNER).is_empty());
        assert_eq!(store.clear(OWNER), 0);
    }

    #[test]
    fn test_claim_after_clear_is_suppressed() {
        let store = ReminderStore::new();
        let mut flags = Vec::new();
        let id = store.add(reminder("gone"), None, armed(&mut flags)).unwrap();
        store.clear(OWNER);
        assert!(store.claim(OWNER, id).is_none());
    }

    #[test]
    fn test_identical_reminders_are_distinct() {
        let store = ReminderStore::new();
        let mut flags = Vec::new();
        let now = Local::now();
        let a = Reminder::new(OWNER, "same".into(), DelayClass::FiveMinutes, now);
        let b = Reminder::new(OWNER, "same".into(), DelayClass::FiveMinutes, now);
        let a_id = store.add(a, None, armed(&mut flags)).unwrap();
        let b_id = store.add(b, None, armed(&mut flags)).unwrap();

        assert_eq!(store.remove_by_predicate(OWNER, |r| r.id == a_id), 1);
        let left = store.list_active(OWNER);
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, b_id);
    }
}
