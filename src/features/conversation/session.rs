//! Conversation input, session states and transitions
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Text-first reminder entry and interactive auto-reply entry
//! - 1.0.0: Delay → text reminder flow with global cancel
//!
//! [`SessionState::step`] is a pure function. It decides the next state and
//! what should happen; the machine performs the action afterwards.

use std::fmt;

use crate::core::ReminderError;
use crate::features::reminders::DelayClass;

/// One already-tokenized input from a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Start a reminder, optionally with the delay and/or text inline
    StartReminder {
        delay: Option<String>,
        text: Option<String>,
    },
    /// Start setting an auto-reply, optionally with the text inline
    StartAutoReply { text: Option<String> },
    Cancel,
    /// Any non-command text
    Text(String),
    /// A command the conversation does not handle
    UnknownCommand(String),
}

impl Input {
    /// Parse a chat line such as `/setreminder 5m Call John` or free text
    pub fn parse(line: &str) -> Input {
        let line = line.trim();
        let Some(command_line) = line.strip_prefix('/') else {
            return Input::Text(line.to_string());
        };

        let (command, rest) = match command_line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (command_line, ""),
        };
        // `/cancel@MyBot` style suffixes
        let command = command.split('@').next().unwrap_or(command).to_lowercase();

        match command.as_str() {
            "setreminder" | "remind" => Self::parse_reminder_args(rest),
            "setautoreply" => Input::StartAutoReply {
                text: non_empty(rest),
            },
            "cancel" => Input::Cancel,
            _ => Input::UnknownCommand(command),
        }
    }

    fn parse_reminder_args(rest: &str) -> Input {
        let (first, remainder) = split_token(rest);

        // `10 min Buy milk`: number and unit as separate words
        if !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) {
            let (unit, after_unit) = split_token(remainder);
            let spaced = format!("{first} {unit}");
            if !unit.is_empty() && DelayClass::looks_like_delay(&spaced) {
                return Input::StartReminder {
                    delay: Some(spaced),
                    text: non_empty(after_unit),
                };
            }
        }

        if !first.is_empty() && DelayClass::looks_like_delay(first) {
            Input::StartReminder {
                delay: Some(first.to_string()),
                text: non_empty(remainder),
            }
        } else {
            Input::StartReminder {
                delay: None,
                text: non_empty(rest),
            }
        }
    }
}

/// First whitespace-separated word and the trimmed rest
fn split_token(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (text, ""),
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Where a user is in a multi-step flow
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// Waiting for a delay; text may already be known
    AwaitingDelay { pending_text: Option<String> },
    AwaitingText { pending_delay: DelayClass },
    AwaitingAutoReply,
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    /// Compute the transition for one input
    pub fn step(self, input: Input) -> Step {
        match input {
            Input::Cancel => Step::new(SessionState::Idle, Action::Cancelled),
            Input::StartReminder { delay, text } => self.start_reminder(delay, text),
            Input::StartAutoReply { text } => match text.as_deref().and_then(non_empty) {
                Some(text) => Step::new(SessionState::Idle, Action::SetAutoReply(text)),
                None => Step::prompt(SessionState::AwaitingAutoReply, Prompt::EnterAutoReply),
            },
            Input::UnknownCommand(_) => Step::new(self, Action::Ignore),
            Input::Text(text) => self.on_text(text),
        }
    }

    /// Start intents restart the flow from scratch, whatever the state
    fn start_reminder(self, delay: Option<String>, text: Option<String>) -> Step {
        let text = text.as_deref().and_then(non_empty);
        let delay = delay.as_deref().and_then(non_empty);

        match delay {
            Some(raw) => match DelayClass::parse(&raw) {
                Err(err) => Step::new(self, Action::Reject(err)),
                Ok(delay) => match text {
                    Some(text) => Step::new(SessionState::Idle, Action::Schedule { delay, text }),
                    None => Step::prompt(
                        SessionState::AwaitingText {
                            pending_delay: delay,
                        },
                        Prompt::EnterText(delay),
                    ),
                },
            },
            None => Step::prompt(
                SessionState::AwaitingDelay { pending_text: text },
                Prompt::ChooseDelay,
            ),
        }
    }

    fn on_text(self, text: String) -> Step {
        match self {
            SessionState::Idle => Step::new(SessionState::Idle, Action::AutoReply),
            SessionState::AwaitingDelay { pending_text } => match DelayClass::parse(&text) {
                Ok(delay) => match pending_text {
                    Some(text) => Step::new(SessionState::Idle, Action::Schedule { delay, text }),
                    None => Step::prompt(
                        SessionState::AwaitingText {
                            pending_delay: delay,
                        },
                        Prompt::EnterText(delay),
                    ),
                },
                Err(_) => Step::prompt(
                    SessionState::AwaitingDelay { pending_text },
                    Prompt::RetryDelay,
                ),
            },
            SessionState::AwaitingText { pending_delay } => match non_empty(&text) {
                Some(text) => Step::new(
                    SessionState::Idle,
                    Action::Schedule {
                        delay: pending_delay,
                        text,
                    },
                ),
                None => Step::prompt(
                    SessionState::AwaitingText { pending_delay },
                    Prompt::RetryText(pending_delay),
                ),
            },
            SessionState::AwaitingAutoReply => match non_empty(&text) {
                Some(text) => Step::new(SessionState::Idle, Action::SetAutoReply(text)),
                None => Step::prompt(SessionState::AwaitingAutoReply, Prompt::EnterAutoReply),
            },
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::AwaitingDelay { .. } => write!(f, "awaiting_delay"),
            SessionState::AwaitingText { pending_delay } => {
                write!(f, "awaiting_text({pending_delay})")
            }
            SessionState::AwaitingAutoReply => write!(f, "awaiting_auto_reply"),
        }
    }
}

/// Question to put to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    ChooseDelay,
    /// The last answer was not a delay
    RetryDelay,
    EnterText(DelayClass),
    /// The last answer was empty
    RetryText(DelayClass),
    EnterAutoReply,
}

/// Side effect decided by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Prompt(Prompt),
    Schedule { delay: DelayClass, text: String },
    SetAutoReply(String),
    AutoReply,
    Cancelled,
    Reject(ReminderError),
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub next: SessionState,
    pub action: Action,
}

impl Step {
    fn new(next: SessionState, action: Action) -> Self {
        Step { next, action }
    }

    fn prompt(next: SessionState, prompt: Prompt) -> Self {
        Step::new(next, Action::Prompt(prompt))
    }
}
