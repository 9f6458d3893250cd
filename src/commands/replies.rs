//! User-facing reply texts
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Auto-reply prompts and confirmations
//! - 1.0.0: Reminder prompts, list and errors

use crate::core::ReminderError;
use crate::features::conversation::{Outcome, Prompt};
use crate::features::reminders::{DelayClass, ReminderSummary};

pub const NO_ACTIVE_REMINDERS: &str = "You have no active reminders.";
pub const NOTHING_TO_CLEAR: &str = "You have no reminders to clear.";

pub const HELP_TEXT: &str = r#"🤖 **Welcome to the Auto Reply & Reminder Bot!**

**Available commands:**
`/start` - Show this help message
`/setreminder [time] [message]` - Set a new reminder
`/listreminders` - List all your reminders
`/clearreminders` - Clear all reminders
`/setautoreply [message]` - Set your auto-reply message
`/disableautoreply` - Disable auto-reply
`/cancel` - Cancel the current operation

Reminder times: `5min`, `10min`, `30min`, `1h` (short forms like `5m` work too).
I'll DM you when a reminder is due and answer your messages when auto-reply is on."#;

pub fn render_prompt(prompt: Prompt) -> String {
    match prompt {
        Prompt::ChooseDelay => format!("Please choose reminder time: {}", DelayClass::menu()),
        Prompt::RetryDelay => format!(
            "Please choose a valid time option: {}\nOr send `/cancel` to stop.",
            DelayClass::menu()
        ),
        Prompt::EnterText(delay) => format!(
            "⏱️ **{delay}** it is. Now send me the reminder text, e.g. `Call John`."
        ),
        Prompt::RetryText(delay) => format!(
            "The reminder text can't be empty. What should I remind you about in **{delay}**?"
        ),
        Prompt::EnterAutoReply => "Please send me the auto-reply message. Example: `I'm busy right now, I'll get back to you soon.`".to_string(),
    }
}

/// Text to answer a conversation step with; `None` means stay silent
pub fn render_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Prompt(prompt) => Some(render_prompt(*prompt)),
        Outcome::Scheduled(reminder) => Some(format!(
            "✅ Reminder set! I'll remind you in {}:\n\"{}\"",
            reminder.delay, reminder.text
        )),
        Outcome::AutoReplySet(text) => Some(format!("✅ Auto-reply set to: {text}")),
        Outcome::AutoReply(text) => Some(text.clone()),
        Outcome::Cancelled => Some("Operation cancelled.".to_string()),
        Outcome::Ignored => None,
    }
}

pub fn render_error(err: &ReminderError) -> String {
    match err {
        ReminderError::InvalidDelayClass(raw) => format!(
            "❌ `{raw}` isn't a reminder time I know. Choose one of: {}",
            DelayClass::menu()
        ),
        ReminderError::EmptyReminderText => "❌ The reminder text can't be empty.".to_string(),
        ReminderError::EmptyAutoReplyText => {
            "❌ The auto-reply message can't be empty.".to_string()
        }
        ReminderError::QuotaExceeded { limit } => format!(
            "❌ You already have {limit} active reminders. Use `/clearreminders` to make room."
        ),
        ReminderError::NotifyDeliveryFailed { .. } => {
            "❌ Sorry, I couldn't deliver that message.".to_string()
        }
    }
}

fn plural_minutes(minutes: i64) -> &'static str {
    if minutes == 1 {
        "minute"
    } else {
        "minutes"
    }
}

pub fn render_reminder_list(reminders: &[ReminderSummary]) -> String {
    if reminders.is_empty() {
        return NO_ACTIVE_REMINDERS.to_string();
    }

    let mut text = String::from("📋 Your active reminders:\n\n");
    for (i, reminder) in reminders.iter().enumerate() {
        text.push_str(&format!(
            "{}. {}\n   ⏰ {} {} left\n\n",
            i + 1,
            reminder.text,
            reminder.minutes_remaining,
            plural_minutes(reminder.minutes_remaining)
        ));
    }
    text.trim_end().to_string()
}

pub fn render_cleared(count: usize) -> String {
    match count {
        0 => NOTHING_TO_CLEAR.to_string(),
        1 => "✅ All reminders cleared! (1 reminder cancelled)".to_string(),
        n => format!("✅ All reminders cleared! ({n} reminders cancelled)"),
    }
}

pub fn render_auto_reply_disabled(was_enabled: bool) -> String {
    if was_enabled {
        "✅ Auto-reply disabled!".to_string()
    } else {
        "Auto-reply was not enabled.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReminderId;

    fn summary(text: &str, minutes: i64) -> ReminderSummary {
        ReminderSummary {
            id: ReminderId::new(),
            text: text.to_string(),
            delay: DelayClass::TenMinutes,
            minutes_remaining: minutes,
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render_reminder_list(&[]), NO_ACTIVE_REMINDERS);
    }

    #[test]
    fn test_numbered_list() {
        let text = render_reminder_list(&[summary("Buy milk", 9), summary("Call John", 1)]);
        assert_eq!(
            text,
            "📋 Your active reminders:\n\n1. Buy milk\n   ⏰ 9 minutes left\n\n2. Call John\n   ⏰ 1 minute left"
        );
    }

    #[test]
    fn test_cleared_messages() {
        assert_eq!(render_cleared(0), NOTHING_TO_CLEAR);
        assert!(render_cleared(1).contains("1 reminder cancelled"));
        assert!(render_cleared(3).contains("3 reminders cancelled"));
    }

    #[test]
    fn test_ignored_is_silent() {
        assert_eq!(render_outcome(&Outcome::Ignored), None);
        assert_eq!(
            render_outcome(&Outcome::Cancelled).as_deref(),
            Some("Operation cancelled.")
        );
    }

    #[test]
    fn test_prompts_mention_menu() {
        assert!(render_prompt(Prompt::ChooseDelay).contains("`1h`"));
        assert!(render_prompt(Prompt::RetryDelay).contains("`5min`"));
        assert!(render_prompt(Prompt::EnterText(DelayClass::OneHour)).contains("1h"));
    }

    #[test]
    fn test_invalid_delay_error_lists_options() {
        let text = render_error(&ReminderError::InvalidDelayClass("7min".into()));
        assert!(text.contains("`7min`"));
        assert!(text.contains("`30min`"));
    }

    #[test]
    fn test_auto_reply_disabled_messages() {
        assert_eq!(render_auto_reply_disabled(true), "✅ Auto-reply disabled!");
        assert_eq!(render_auto_reply_disabled(false), "Auto-reply was not enabled.");
    }
}
