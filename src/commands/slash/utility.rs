//! Utility slash commands: /start, /help, /cancel, /ping

use serenity::builder::CreateApplicationCommand;

/// Creates utility commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        simple_command("start", "Show what I can do"),
        simple_command("help", "Show the list of commands"),
        simple_command("cancel", "Cancel the current operation"),
        simple_command("ping", "Test bot responsiveness"),
    ]
}

fn simple_command(name: &str, description: &str) -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name(name)
        .description(description)
        .to_owned()
}
