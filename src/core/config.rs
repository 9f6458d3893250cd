//! Environment-driven bot configuration
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Add reminder quota and auto-reply pool settings
//! - 1.0.0: Initial token/guild/log level configuration

use anyhow::Result;

/// Default cap on simultaneously active reminders per user
pub const DEFAULT_MAX_REMINDERS_PER_USER: usize = 25;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub discord_guild_id: Option<String>,
    pub log_level: String,
    pub max_reminders_per_user: usize,
    pub auto_reply_pool_path: Option<String>,
    pub auto_reply_in_guilds: bool,
}

impl Config {
    /// Build configuration from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a local `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_MUP_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DISCORD_MUP_TOKEN must be set"))?;

        let max_reminders_per_user = match lookup("REMINDER_MAX_PER_USER") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                anyhow::anyhow!("REMINDER_MAX_PER_USER must be a positive number: {}", e)
            })?,
            None => DEFAULT_MAX_REMINDERS_PER_USER,
        };
        if max_reminders_per_user == 0 {
            return Err(anyhow::anyhow!("REMINDER_MAX_PER_USER must be at least 1"));
        }

        let auto_reply_in_guilds = lookup("AUTO_REPLY_IN_GUILDS")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Ok(Config {
            discord_token,
            discord_guild_id: lookup("DISCORD_GUILD_ID").filter(|id| !id.trim().is_empty()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            max_reminders_per_user,
            auto_reply_pool_path: lookup("AUTO_REPLY_POOL_PATH")
                .filter(|p| !p.trim().is_empty()),
            auto_reply_in_guilds,
        })
    }
}
