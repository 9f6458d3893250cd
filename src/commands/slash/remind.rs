//! Reminder slash commands: /setreminder, /listreminders, /clearreminders

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use crate::features::reminders::DelayClass;

/// Creates reminder commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_setreminder_command(),
        create_listreminders_command(),
        create_clearreminders_command(),
    ]
}

/// Both options are optional; a missing one is asked for in the conversation
fn create_setreminder_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("setreminder")
        .description("Set a reminder that I'll DM you later")
        .create_option(|option| {
            option
                .name("time")
                .description("When to remind you")
                .kind(CommandOptionType::String)
                .required(false);
            for delay in DelayClass::ALL {
                option.add_string_choice(delay.label(), delay.label());
            }
            option
        })
        .create_option(|option| {
            option
                .name("message")
                .description("What to remind you about")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .to_owned()
}

fn create_listreminders_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("listreminders")
        .description("List your active reminders")
        .to_owned()
}

fn create_clearreminders_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("clearreminders")
        .description("Cancel all of your reminders")
        .to_owned()
}
