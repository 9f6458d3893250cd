//! Fixed reminder lead times and alias parsing
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use chrono::Duration;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::core::ReminderError;

/// One of the four lead times a reminder can be set for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayClass {
    FiveMinutes,
    TenMinutes,
    ThirtyMinutes,
    OneHour,
}

/// `<number><unit>` with an optional space, e.g. `5m`, `10 min`, `1hour`
static DELAY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn delay_pattern() -> &'static Regex {
    DELAY_PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{1,4})\s*(m|min|mins|minute|minutes|h|hr|hrs|hour|hours)$")
            .expect("delay pattern is valid")
    })
}

impl DelayClass {
    /// All classes in menu order
    pub const ALL: [DelayClass; 4] = [
        DelayClass::FiveMinutes,
        DelayClass::TenMinutes,
        DelayClass::ThirtyMinutes,
        DelayClass::OneHour,
    ];

    /// Canonical token, also used as the menu label
    pub fn label(&self) -> &'static str {
        match self {
            DelayClass::FiveMinutes => "5min",
            DelayClass::TenMinutes => "10min",
            DelayClass::ThirtyMinutes => "30min",
            DelayClass::OneHour => "1h",
        }
    }

    pub fn minutes(&self) -> i64 {
        match self {
            DelayClass::FiveMinutes => 5,
            DelayClass::TenMinutes => 10,
            DelayClass::ThirtyMinutes => 30,
            DelayClass::OneHour => 60,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(self.minutes())
    }

    fn from_minutes(minutes: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.minutes() == minutes)
    }

    /// Parse a canonical token or alias (`5m`, `10 mins`, `60min`, `1hr`, ...)
    pub fn parse(input: &str) -> Result<Self, ReminderError> {
        let normalized = input.trim().to_lowercase();
        let invalid = || ReminderError::InvalidDelayClass(input.trim().to_string());

        let caps = delay_pattern().captures(&normalized).ok_or_else(invalid)?;
        let amount: i64 = caps[1].parse().map_err(|_| invalid())?;
        let minutes = if caps[2].starts_with('h') {
            amount * 60
        } else {
            amount
        };

        Self::from_minutes(minutes).ok_or_else(invalid)
    }

    /// Whether the token has the shape of a delay, valid or not.
    ///
    /// Used to tell `/setreminder 7min call mom` (a bad delay) apart from
    /// `/setreminder call mom` (text only).
    pub fn looks_like_delay(token: &str) -> bool {
        delay_pattern().is_match(&token.trim().to_lowercase())
    }

    /// Menu line shown when asking the user to pick a time
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .map(|class| format!("`{}`", class.label()))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

impl fmt::Display for DelayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DelayClass {
    type Err = ReminderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DelayClass::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tokens() {
        for class in DelayClass::ALL {
            assert_eq!(DelayClass::parse(class.label()), Ok(class));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(DelayClass::parse("5m"), Ok(DelayClass::FiveMinutes));
        assert_eq!(DelayClass::parse("5 mins"), Ok(DelayClass::FiveMinutes));
        assert_eq!(DelayClass::parse("10M"), Ok(DelayClass::TenMinutes));
        assert_eq!(DelayClass::parse(" 30minutes "), Ok(DelayClass::ThirtyMinutes));
        assert_eq!(DelayClass::parse("60min"), Ok(DelayClass::OneHour));
        assert_eq!(DelayClass::parse("1hr"), Ok(DelayClass::OneHour));
        assert_eq!(DelayClass::parse("1 hour"), Ok(DelayClass::OneHour));
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert_eq!(
            DelayClass::parse("7min"),
            Err(ReminderError::InvalidDelayClass("7min".into()))
        );
        assert!(DelayClass::parse("2h").is_err());
        assert!(DelayClass::parse("soon").is_err());
        assert!(DelayClass::parse("").is_err());
        assert!(DelayClass::parse("5d").is_err());
    }

    #[test]
    fn test_durations() {
        assert_eq!(DelayClass::FiveMinutes.duration(), Duration::minutes(5));
        assert_eq!(DelayClass::TenMinutes.duration(), Duration::minutes(10));
        assert_eq!(DelayClass::ThirtyMinutes.duration(), Duration::minutes(30));
        assert_eq!(DelayClass::OneHour.duration(), Duration::hours(1));
    }

    #[test]
    fn test_looks_like_delay() {
        assert!(DelayClass::looks_like_delay("7min"));
        assert!(DelayClass::looks_like_delay("2h"));
        assert!(!DelayClass::looks_like_delay("Call"));
        assert!(!DelayClass::looks_like_delay("5d"));
    }

    #[test]
    fn test_menu_lists_all_classes() {
        assert_eq!(DelayClass::menu(), "`5min` · `10min` · `30min` · `1h`");
    }
}
