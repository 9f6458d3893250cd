//! Slash command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;

/// A group of slash commands answered by one type.
///
/// Handlers are stateless; everything they touch lives in the shared
/// [`CommandContext`]. A handler must answer the interaction itself, usually
/// through `handlers::respond`.
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Names this handler is registered under
    fn command_names(&self) -> &'static [&'static str];

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()>;
}
