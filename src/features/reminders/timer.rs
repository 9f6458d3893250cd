//! Clock and one-shot timer facility
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! The scheduler only ever sees [`JobHandle`]s. How the wait is implemented
//! (a tokio task here) stays behind [`TimerFacility`].

use chrono::{DateTime, Local};
use log::debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Source of local wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Work to run when a job fires
pub type FireFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Schedules one-shot jobs at an absolute time
pub trait TimerFacility: Send + Sync {
    fn schedule_at(&self, at: DateTime<Local>, on_fire: FireFuture) -> JobHandle;
}

/// Cancellable reference to a scheduled job
#[derive(Debug)]
pub struct JobHandle {
    id: Uuid,
    cancelled: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl JobHandle {
    /// Handle around a shared cancellation flag and, optionally, the task
    /// that will observe it.
    pub fn new(cancelled: Arc<AtomicBool>, task: Option<JoinHandle<()>>) -> Self {
        JobHandle {
            id: Uuid::new_v4(),
            cancelled,
            task,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Set the cancellation flag and stop the waiting task.
    ///
    /// The flag is what actually guarantees suppression: a task that already
    /// woke up checks it before running the fire callback.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(task) = &self.task {
            task.abort();
        }
        debug!("Cancelled timer job {}", self.id);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Timer facility backed by `tokio::time::sleep`, one task per job
#[derive(Clone)]
pub struct TokioTimer {
    clock: Arc<dyn Clock>,
}

impl TokioTimer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        TokioTimer { clock }
    }
}

impl TimerFacility for TokioTimer {
    fn schedule_at(&self, at: DateTime<Local>, on_fire: FireFuture) -> JobHandle {
        // Past instants fire on the next tick
        let delay = (at - self.clock.now())
            .to_std()
            .unwrap_or(Duration::ZERO);

        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if flag.load(Ordering::SeqCst) {
                return;
            }
            on_fire.await;
        });

        JobHandle::new(cancelled, Some(task))
    }
}
