//! Identifiers for reminder owners and reminders
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.2.0

use std::fmt;
use uuid::Uuid;

/// Opaque, stable identifier of the account a reminder belongs to.
///
/// On Discord this is the snowflake of the sending user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(pub u64);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OwnerId {
    fn from(id: u64) -> Self {
        OwnerId(id)
    }
}

/// Unique identity of a single reminder.
///
/// Two reminders with the same text and due time still have distinct ids,
/// so firing or cancelling one can never touch the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReminderId(Uuid);

impl ReminderId {
    pub fn new() -> Self {
        ReminderId(Uuid::new_v4())
    }

    /// Short form used in log lines
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_ids_are_unique() {
        let a = ReminderId::new();
        let b = ReminderId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_id_length() {
        assert_eq!(ReminderId::new().short().len(), 8);
    }

    #[test]
    fn test_owner_display() {
        assert_eq!(OwnerId(42).to_string(), "42");
        assert_eq!(OwnerId::from(7), OwnerId(7));
    }
}
