//! # Assistant
//!
//! Process-wide state and the operations the chat adapter calls.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Load the auto-reply pool from config
//! - 1.0.0: Initial facade over scheduler, conversation and auto-reply

use anyhow::Result;
use log::{error, info};
use std::sync::Arc;

use crate::core::{Config, OwnerId, ReminderError};
use crate::features::auto_reply::{AutoReplyPolicy, AutoReplyStore, ResponsePool};
use crate::features::conversation::{ConversationMachine, Input, Outcome, SessionState, SessionStore};
use crate::features::reminders::{
    Clock, Notifier, ReminderScheduler, ReminderStore, ReminderSummary, SystemClock,
    TimerFacility, TokioTimer,
};

/// All mutable per-user state. Volatile: created once at startup, gone on exit.
#[derive(Clone, Default)]
pub struct AssistantState {
    pub reminders: ReminderStore,
    pub sessions: SessionStore,
    pub auto_replies: AutoReplyStore,
}

impl AssistantState {
    pub fn init() -> Self {
        Self::default()
    }
}

#[derive(Clone)]
pub struct Assistant {
    scheduler: ReminderScheduler,
    conversation: ConversationMachine,
    auto_reply: AutoReplyPolicy,
}

impl Assistant {
    /// Wire an assistant with explicit timer and clock
    pub fn with_facilities(
        state: AssistantState,
        notifier: Arc<dyn Notifier>,
        timer: Arc<dyn TimerFacility>,
        clock: Arc<dyn Clock>,
        pool: ResponsePool,
        max_reminders_per_user: Option<usize>,
    ) -> Self {
        let mut scheduler = ReminderScheduler::new(state.reminders, timer, clock, notifier);
        if let Some(limit) = max_reminders_per_user {
            scheduler = scheduler.with_max_per_user(limit);
        }
        let auto_reply = AutoReplyPolicy::new(state.auto_replies, pool);
        let conversation =
            ConversationMachine::new(state.sessions, scheduler.clone(), auto_reply.clone());

        Assistant {
            scheduler,
            conversation,
            auto_reply,
        }
    }

    /// Wall-clock time and tokio timers
    pub fn new(
        state: AssistantState,
        notifier: Arc<dyn Notifier>,
        pool: ResponsePool,
        max_reminders_per_user: Option<usize>,
    ) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let timer = Arc::new(TokioTimer::new(Arc::clone(&clock)));
        Self::with_facilities(state, notifier, timer, clock, pool, max_reminders_per_user)
    }

    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let pool = match &config.auto_reply_pool_path {
            Some(path) => match ResponsePool::load(path) {
                Ok(pool) => {
                    info!("📄 Loaded {} auto-reply responses from {path}", pool.len());
                    pool
                }
                Err(e) => {
                    error!("❌ Failed to load auto-reply pool from {path}: {e}. Using built-in responses");
                    ResponsePool::builtin()
                }
            },
            None => ResponsePool::builtin(),
        };

        Ok(Self::new(
            AssistantState::init(),
            notifier,
            pool,
            Some(config.max_reminders_per_user),
        ))
    }

    /// Start a reminder. With both arguments the reminder is created right
    /// away; otherwise the interactive flow starts and a prompt comes back.
    pub fn schedule_reminder(
        &self,
        owner: OwnerId,
        delay: Option<&str>,
        text: Option<&str>,
    ) -> Result<Outcome, ReminderError> {
        self.conversation.advance(
            owner,
            Input::StartReminder {
                delay: delay.map(str::to_string),
                text: text.map(str::to_string),
            },
        )
    }

    pub fn advance_conversation(
        &self,
        owner: OwnerId,
        input: Input,
    ) -> Result<Outcome, ReminderError> {
        self.conversation.advance(owner, input)
    }

    pub fn list_reminders(&self, owner: OwnerId) -> Vec<ReminderSummary> {
        self.scheduler.list(owner)
    }

    pub fn cancel_all_reminders(&self, owner: OwnerId) -> usize {
        self.scheduler.cancel_all(owner)
    }

    pub fn set_auto_reply(&self, owner: OwnerId, text: &str) -> Result<String, ReminderError> {
        self.auto_reply.set(owner, text)
    }

    /// Returns whether an auto-reply was active
    pub fn disable_auto_reply(&self, owner: OwnerId) -> bool {
        self.auto_reply.disable(owner)
    }

    pub fn session_state(&self, owner: OwnerId) -> SessionState {
        self.conversation.state(owner)
    }
}
