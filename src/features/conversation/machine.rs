//! Per-user conversation state machine
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Route auto-reply entry and idle messages through the machine
//! - 1.0.0: Initial reminder flow
//!
//! The transition for one user is computed and stored while that user's
//! session entry is locked. The resulting action (scheduling, auto-reply)
//! runs after the lock is released.

use dashmap::DashMap;
use log::debug;
use std::sync::Arc;

use super::session::{Action, Input, Prompt, SessionState};
use crate::core::{OwnerId, ReminderError};
use crate::features::auto_reply::AutoReplyPolicy;
use crate::features::reminders::{Reminder, ReminderScheduler};

/// Result of one conversation step, ready to be rendered for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Prompt(Prompt),
    Scheduled(Reminder),
    AutoReplySet(String),
    /// Reply to send back to a plain message
    AutoReply(String),
    Cancelled,
    /// Nothing to say
    Ignored,
}

/// Session records keyed by user; created lazily on first input
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<OwnerId, SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, owner: OwnerId) -> SessionState {
        self.sessions
            .get(&owner)
            .map(|s| s.value().clone())
            .unwrap_or_default()
    }

    /// Apply one input atomically for this user. Returns the state the
    /// step started from along with the action to perform.
    fn transition(&self, owner: OwnerId, input: Input) -> (SessionState, Action) {
        let (previous, action) = {
            let mut session = self.sessions.entry(owner).or_default();
            let current = std::mem::take(session.value_mut());
            let step = current.clone().step(input);
            debug!("Session {owner}: {current} -> {}", step.next);
            *session.value_mut() = step.next;
            (current, step.action)
        };
        self.prune(owner);
        (previous, action)
    }

    /// Put back the state a failed step started from, unless the user has
    /// already moved on to another flow.
    fn restore(&self, owner: OwnerId, previous: SessionState) {
        if previous.is_idle() {
            return;
        }
        let mut session = self.sessions.entry(owner).or_default();
        if session.is_idle() {
            debug!("Session {owner}: restored {previous}");
            *session.value_mut() = previous;
        }
    }

    /// Idle is the default; only users mid-flow keep a record
    fn prune(&self, owner: OwnerId) {
        self.sessions.remove_if(&owner, |_, state| state.is_idle());
    }
}

#[derive(Clone)]
pub struct ConversationMachine {
    sessions: SessionStore,
    scheduler: ReminderScheduler,
    auto_reply: AutoReplyPolicy,
}

impl ConversationMachine {
    pub fn new(
        sessions: SessionStore,
        scheduler: ReminderScheduler,
        auto_reply: AutoReplyPolicy,
    ) -> Self {
        ConversationMachine {
            sessions,
            scheduler,
            auto_reply,
        }
    }

    pub fn state(&self, owner: OwnerId) -> SessionState {
        self.sessions.state(owner)
    }

    /// Feed one input to the user's session.
    ///
    /// Errors only come from inline arguments (`/setreminder 7min ...`) or
    /// the per-user reminder cap. A reminder that could not be scheduled
    /// leaves the session where it was, pending delay and text included, so
    /// the user can answer again once there is room.
    pub fn advance(&self, owner: OwnerId, input: Input) -> Result<Outcome, ReminderError> {
        let (previous, action) = self.sessions.transition(owner, input);
        match action {
            Action::Prompt(prompt) => Ok(Outcome::Prompt(prompt)),
            Action::Schedule { delay, text } => {
                match self.scheduler.schedule(owner, &text, delay) {
                    Ok(reminder) => Ok(Outcome::Scheduled(reminder)),
                    Err(e) => {
                        self.sessions.restore(owner, previous);
                        Err(e)
                    }
                }
            }
            Action::SetAutoReply(text) => self
                .auto_reply
                .set(owner, &text)
                .map(Outcome::AutoReplySet),
            Action::AutoReply => Ok(self
                .auto_reply
                .reply_for(owner)
                .map(Outcome::AutoReply)
                .unwrap_or(Outcome::Ignored)),
            Action::Cancelled => Ok(Outcome::Cancelled),
            Action::Reject(err) => Err(err),
            Action::Ignore => Ok(Outcome::Ignored),
        }
    }
}
