//! Auto-reply slash commands: /setautoreply, /disableautoreply

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

/// Creates auto-reply commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_setautoreply_command(), create_disableautoreply_command()]
}

fn create_setautoreply_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("setautoreply")
        .description("Set the message I answer with while you're away")
        .create_option(|option| {
            option
                .name("message")
                .description("The auto-reply text (leave empty to be asked)")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .to_owned()
}

fn create_disableautoreply_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("disableautoreply")
        .description("Turn your auto-reply off")
        .to_owned()
}
