//! Utility command handlers
//!
//! Handles: start, help, cancel, ping
//!
//! - **Version**: 2.0.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 2.0.0: Add start and cancel, drop status/version/uptime
//! - 1.0.0: Extracted from command_handler.rs

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use super::{owner_of, respond};
use crate::commands::context::{format_uptime, CommandContext};
use crate::commands::handler::SlashCommandHandler;
use crate::commands::replies::{render_error, render_outcome, HELP_TEXT};
use crate::features::conversation::Input;

/// Handler for utility commands: start, help, cancel, ping
pub struct UtilityHandler;

#[async_trait]
impl SlashCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "help", "cancel", "ping"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "start" | "help" => respond(serenity_ctx, command, HELP_TEXT).await,
            "cancel" => self.handle_cancel(&ctx, serenity_ctx, command).await,
            "ping" => {
                let reply = format!("Pong! Up for {}", format_uptime(ctx.uptime()));
                respond(serenity_ctx, command, &reply).await
            }
            _ => Ok(()),
        }
    }
}

impl UtilityHandler {
    /// Handle /cancel - drop whatever the user was in the middle of
    async fn handle_cancel(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let owner = owner_of(command);
        let reply = match ctx.assistant.advance_conversation(owner, Input::Cancel) {
            Ok(outcome) => render_outcome(&outcome).unwrap_or_default(),
            Err(e) => render_error(&e),
        };

        info!("Cancel command completed for user {owner}");
        respond(serenity_ctx, command, &reply).await
    }
}
