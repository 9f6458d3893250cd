//! Per-command handler implementations
//!
//! - **Version**: 3.0.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 3.0.0: Reminder and auto-reply handlers replace the chat feature set
//! - 1.0.0: Initial extraction from monolithic command_handler.rs

pub mod auto_reply;
pub mod remind;
pub mod utility;

use anyhow::Result;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use super::handler::SlashCommandHandler;
use crate::core::{chunk_for_message, truncate_for_message, OwnerId};

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(utility::UtilityHandler),
        Arc::new(remind::RemindHandler),
        Arc::new(auto_reply::AutoReplyHandler),
    ]
}

pub(crate) fn owner_of(command: &ApplicationCommandInteraction) -> OwnerId {
    OwnerId(command.user.id.0)
}

/// Answer the interaction with a message only the invoking user sees
pub(crate) async fn respond(
    serenity_ctx: &Context,
    command: &ApplicationCommandInteraction,
    content: &str,
) -> Result<()> {
    let content = if content.trim().is_empty() {
        "✅".to_string()
    } else {
        truncate_for_message(content)
    };
    command
        .create_interaction_response(&serenity_ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(&content).ephemeral(true))
        })
        .await?;
    Ok(())
}

/// Like [`respond`], sending text past the message limit as follow-ups
pub(crate) async fn respond_chunked(
    serenity_ctx: &Context,
    command: &ApplicationCommandInteraction,
    content: &str,
) -> Result<()> {
    let mut chunks = chunk_for_message(content).into_iter();
    let first = chunks.next().unwrap_or_default();
    respond(serenity_ctx, command, &first).await?;

    for chunk in chunks {
        command
            .create_followup_message(&serenity_ctx.http, |message| {
                message.content(&chunk).ephemeral(true)
            })
            .await?;
    }
    Ok(())
}
