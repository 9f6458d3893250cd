//! Auto-reply command handlers
//!
//! Handles: setautoreply, disableautoreply
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use super::{owner_of, respond};
use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::replies::{render_auto_reply_disabled, render_error, render_outcome};
use crate::commands::slash::get_string_option;
use crate::features::conversation::Input;

/// Handler for auto-reply commands
pub struct AutoReplyHandler;

#[async_trait]
impl SlashCommandHandler for AutoReplyHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["setautoreply", "disableautoreply"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let owner = owner_of(command);

        let reply = match command.data.name.as_str() {
            "setautoreply" => {
                let text = get_string_option(&command.data.options, "message");
                match ctx
                    .assistant
                    .advance_conversation(owner, Input::StartAutoReply { text })
                {
                    Ok(outcome) => render_outcome(&outcome).unwrap_or_default(),
                    Err(e) => render_error(&e),
                }
            }
            "disableautoreply" => {
                let was_enabled = ctx.assistant.disable_auto_reply(owner);
                if was_enabled {
                    info!("🔕 Auto-reply disabled for user {owner}");
                }
                render_auto_reply_disabled(was_enabled)
            }
            _ => return Ok(()),
        };

        respond(serenity_ctx, command, &reply).await
    }
}
