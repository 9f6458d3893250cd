//! Outbound delivery of fired reminders
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serenity::http::Http;
use serenity::model::id::UserId;
use std::sync::Arc;

use crate::core::{chunk_for_message, OwnerId};

/// Sends a text message to a user.
///
/// Implementations may fail (blocked DMs, deleted account); callers treat
/// that as a one-shot best-effort failure.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, owner: OwnerId, text: &str) -> Result<()>;
}

/// Delivers reminders as Discord direct messages
#[derive(Clone)]
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        DiscordNotifier { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn send(&self, owner: OwnerId, text: &str) -> Result<()> {
        let http: &Http = &self.http;
        let dm = UserId(owner.0).create_dm_channel(http).await?;
        for chunk in chunk_for_message(text) {
            dm.send_message(http, |m| m.content(&chunk)).await?;
        }
        debug!("Delivered DM to {owner}");
        Ok(())
    }
}
