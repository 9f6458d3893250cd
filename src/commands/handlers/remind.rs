//! Reminder command handlers
//!
//! Handles: setreminder, listreminders, clearreminders
//!
//! - **Version**: 2.0.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 2.0.0: Fixed delay classes, in-memory reminders and guided entry
//! - 1.0.0: Extracted from command_handler.rs

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use super::{owner_of, respond, respond_chunked};
use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::replies::{render_cleared, render_error, render_outcome, render_reminder_list};
use crate::commands::slash::get_string_option;
use crate::features::conversation::Outcome;

/// Handler for reminder-related commands
pub struct RemindHandler;

#[async_trait]
impl SlashCommandHandler for RemindHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["setreminder", "listreminders", "clearreminders"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "setreminder" => self.handle_setreminder(&ctx, serenity_ctx, command).await,
            "listreminders" => self.handle_listreminders(&ctx, serenity_ctx, command).await,
            "clearreminders" => self.handle_clearreminders(&ctx, serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

impl RemindHandler {
    /// Handle /setreminder - schedule directly or start the guided flow
    async fn handle_setreminder(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let owner = owner_of(command);
        let time = get_string_option(&command.data.options, "time");
        let message = get_string_option(&command.data.options, "message");

        let reply = match ctx
            .assistant
            .schedule_reminder(owner, time.as_deref(), message.as_deref())
        {
            Ok(outcome) => {
                if let Outcome::Scheduled(reminder) = &outcome {
                    info!(
                        "⏰ Reminder {} set for user {owner} in {}",
                        reminder.id.short(),
                        reminder.delay
                    );
                }
                render_outcome(&outcome).unwrap_or_default()
            }
            Err(e) => {
                info!("Rejected /setreminder from user {owner}: {e}");
                render_error(&e)
            }
        };

        respond(serenity_ctx, command, &reply).await
    }

    /// Handle /listreminders
    async fn handle_listreminders(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let owner = owner_of(command);
        let reminders = ctx.assistant.list_reminders(owner);
        let text = render_reminder_list(&reminders);

        respond_chunked(serenity_ctx, command, &text).await
    }

    /// Handle /clearreminders
    async fn handle_clearreminders(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let owner = owner_of(command);
        let cancelled = ctx.assistant.cancel_all_reminders(owner);
        if cancelled > 0 {
            info!("🗑️ Cleared {cancelled} reminders for user {owner}");
        }

        respond(serenity_ctx, command, &render_cleared(cancelled)).await
    }
}
