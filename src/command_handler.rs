//! # Command Handler
//!
//! Entry point for slash commands and plain messages.
//!
//! - **Version**: 2.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.1.0: Typed list, clear and disable commands in messages
//! - 2.0.0: Route plain messages through the conversation machine
//! - 1.0.0: Registry-based slash command dispatch

use anyhow::Result;
use log::{debug, info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::assistant::Assistant;
use crate::commands::context::CommandContext;
use crate::commands::registry::CommandRegistry;
use crate::commands::replies::{
    render_auto_reply_disabled, render_cleared, render_error, render_outcome,
    render_reminder_list, HELP_TEXT,
};
use crate::core::{chunk_for_message, OwnerId};
use crate::features::conversation::Input;

#[derive(Clone)]
pub struct CommandHandler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
    auto_reply_in_guilds: bool,
}

impl CommandHandler {
    pub fn new(assistant: Assistant, auto_reply_in_guilds: bool) -> Self {
        CommandHandler {
            context: Arc::new(CommandContext::new(assistant)),
            registry: CommandRegistry::with_all_handlers(),
            auto_reply_in_guilds,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub async fn handle_slash_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        let guild_id = command
            .guild_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "DM".to_string());

        info!(
            "[{request_id}] 📥 Slash command received | Command: {} | User: {} | Channel: {} | Guild: {guild_id}",
            command.data.name, command.user.id, command.channel_id
        );

        match self.registry.get(&command.data.name) {
            Some(handler) => {
                handler
                    .handle(Arc::clone(&self.context), ctx, command)
                    .await?;
                info!("[{request_id}] ✅ /{} completed", command.data.name);
            }
            None => warn!("[{request_id}] ❓ Unknown slash command: {}", command.data.name),
        }

        Ok(())
    }

    /// Feed a plain message to the sender's conversation and answer it
    pub async fn handle_message(&self, ctx: &Context, msg: &Message) -> Result<()> {
        let owner = OwnerId(msg.author.id.0);
        let bot_id = ctx.cache.current_user_id();
        let mid_flow = !self.context.assistant.session_state(owner).is_idle();

        if !should_handle(
            msg.guild_id.is_none(),
            mid_flow,
            msg.mentions_user_id(bot_id),
            self.auto_reply_in_guilds,
        ) {
            return Ok(());
        }

        let request_id = Uuid::new_v4();
        let content = strip_mention(&msg.content, bot_id.0);
        info!(
            "[{request_id}] 📥 Message received | User: {owner} | Channel: {} | Content: '{}'",
            msg.channel_id,
            content.chars().take(100).collect::<String>()
        );

        let input = Input::parse(&content);
        debug!("[{request_id}] Parsed input: {input:?}");

        let reply = match input {
            Input::UnknownCommand(command) => {
                answer_text_command(&self.context.assistant, owner, &command)
            }
            input => match self.context.assistant.advance_conversation(owner, input) {
                Ok(outcome) => render_outcome(&outcome),
                Err(e) => {
                    debug!("[{request_id}] Rejected input: {e}");
                    Some(render_error(&e))
                }
            },
        };

        if let Some(reply) = reply {
            for chunk in chunk_for_message(&reply) {
                msg.channel_id.say(&ctx.http, chunk).await?;
            }
            info!("[{request_id}] ✅ Reply sent");
        }

        Ok(())
    }
}

/// DMs are always handled. In a guild, a user in the middle of a flow keeps
/// talking to the bot; otherwise only mentions are answered, and only when
/// guild auto-replies are switched on.
fn should_handle(is_dm: bool, mid_flow: bool, mentioned: bool, auto_reply_in_guilds: bool) -> bool {
    is_dm || mid_flow || (mentioned && auto_reply_in_guilds)
}

/// Commands outside the conversation flow, typed as plain text. Unknown
/// ones get no answer.
fn answer_text_command(assistant: &Assistant, owner: OwnerId, command: &str) -> Option<String> {
    match command {
        "start" | "help" => Some(HELP_TEXT.to_string()),
        "listreminders" => Some(render_reminder_list(&assistant.list_reminders(owner))),
        "clearreminders" => {
            let cancelled = assistant.cancel_all_reminders(owner);
            if cancelled > 0 {
                info!("🗑️ Cleared {cancelled} reminders for user {owner}");
            }
            Some(render_cleared(cancelled))
        }
        "disableautoreply" => Some(render_auto_reply_disabled(
            assistant.disable_auto_reply(owner),
        )),
        _ => None,
    }
}

fn strip_mention(content: &str, bot_id: u64) -> String {
    content
        .replace(&format!("<@{bot_id}>"), "")
        .replace(&format!("<@!{bot_id}>"), "")
        .trim()
        .to_string()
}
