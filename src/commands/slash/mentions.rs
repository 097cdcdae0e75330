//! Mention slash commands: /setchannel, /removechannel, /start, /stop

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::channel::ChannelType;
use serenity::model::permissions::Permissions;

/// Creates mention commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_set_channel_command(),
        create_remove_channel_command(),
        create_start_command(),
        create_stop_command(),
    ]
}

/// Creates the setchannel command (admin) - watch one text channel
fn create_set_channel_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("setchannel")
        .description("Add a channel for mentions")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .create_option(|option| {
            option
                .name("channel")
                .description("Select a channel to add")
                .kind(CommandOptionType::Channel)
                .required(true)
                .channel_types(&[ChannelType::Text])
        })
        .to_owned()
}

/// Creates the removechannel command (admin) - opens the removal menu
fn create_remove_channel_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("removechannel")
        .description("Remove channels from mention list")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .to_owned()
}

fn create_start_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("start")
        .description("Start mentioning new members")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .to_owned()
}

fn create_stop_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("stop")
        .description("Stop mentioning new members")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .to_owned()
}
