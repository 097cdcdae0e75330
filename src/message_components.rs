use anyhow::Result;
use log::{info, warn};
use serenity::builder::CreateComponents;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::id::{ChannelId, UserId};
use serenity::model::permissions::Permissions;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::guard::require_administrator;
use crate::commands::CommandContext;
use crate::core::{InteractionReply, MenuOption};
use crate::features::mentions::ChannelDirectory;

/// Custom id of the channel removal select menu
pub const REMOVE_CHANNEL_MENU_ID: &str = "remove_channel";

pub const NOTHING_REMOVED_REPLY: &str = "No channels were removed!";
pub const UNKNOWN_COMPONENT_REPLY: &str = "Unknown component interaction.";

/// A submitted select menu: which menu, who, and what was chosen
#[derive(Debug, Clone)]
pub struct MenuSelection {
    pub request_id: Uuid,
    pub custom_id: String,
    pub user_id: UserId,
    pub permissions: Option<Permissions>,
    pub values: Vec<String>,
}

impl MenuSelection {
    pub fn new(
        custom_id: impl Into<String>,
        user_id: UserId,
        permissions: Option<Permissions>,
        values: Vec<String>,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            custom_id: custom_id.into(),
            user_id,
            permissions,
            values,
        }
    }

    pub fn from_interaction(interaction: &MessageComponentInteraction) -> Self {
        Self::new(
            interaction.data.custom_id.clone(),
            interaction.user.id,
            interaction.member.as_ref().and_then(|m| m.permissions),
            interaction.data.values.clone(),
        )
    }
}

/// Handler for all message component interactions
pub struct MessageComponentHandler {
    context: Arc<CommandContext>,
}

impl MessageComponentHandler {
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }

    /// Handle a select menu submission
    ///
    /// The administrator check runs before the menu id is even looked at.
    pub async fn handle_selection(
        &self,
        channels: &dyn ChannelDirectory,
        selection: &MenuSelection,
    ) -> Result<InteractionReply> {
        let request_id = selection.request_id;
        info!(
            "[{request_id}] Processing component interaction: {} from user: {}",
            selection.custom_id, selection.user_id
        );

        if let Err(denied) = require_administrator(selection.permissions) {
            info!(
                "[{request_id}] Rejected {} from non-administrator {}",
                selection.custom_id, selection.user_id
            );
            return Ok(InteractionReply::notice(denied.reply_text()));
        }

        match selection.custom_id.as_str() {
            REMOVE_CHANNEL_MENU_ID => Ok(self.handle_remove_selection(channels, selection)),
            other => {
                warn!("[{request_id}] Unknown component id: {other}");
                Ok(InteractionReply::notice(UNKNOWN_COMPONENT_REPLY))
            }
        }
    }

    /// Remove the selected channels that are still watched
    fn handle_remove_selection(
        &self,
        channels: &dyn ChannelDirectory,
        selection: &MenuSelection,
    ) -> InteractionReply {
        let selected: Vec<ChannelId> = selection
            .values
            .iter()
            .filter_map(|value| value.parse::<u64>().ok().map(ChannelId))
            .collect();

        let removed = self.context.mentions.remove_channels(selected);
        if removed.is_empty() {
            return InteractionReply::notice(NOTHING_REMOVED_REPLY);
        }

        let names: Vec<String> = removed
            .iter()
            .map(|id| channels.channel_name(*id).unwrap_or_else(|| id.to_string()))
            .collect();
        let remaining = self.context.mentions.channel_count();

        info!(
            "[{}] Removed {} mention channel(s), {remaining} remaining",
            selection.request_id,
            removed.len()
        );

        InteractionReply::ChannelsRemoved { names, remaining }
    }

    /// Create the multi-select menu listing channels that can be removed
    pub fn create_removal_menu(options: &[MenuOption]) -> CreateComponents {
        let max_values = options.len().max(1) as u64;
        CreateComponents::default()
            .create_action_row(|row| {
                row.create_select_menu(|menu| {
                    menu.custom_id(REMOVE_CHANNEL_MENU_ID)
                        .placeholder("Select channels to remove")
                        .min_values(1)
                        .max_values(max_values)
                        .options(|opts| {
                            for option in options {
                                opts.create_option(|o| {
                                    o.label(&option.label)
                                        .value(&option.value)
                                        .description(&option.description)
                                });
                            }
                            opts
                        })
                })
            })
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::guard::NOT_ADMINISTRATOR_REPLY;
    use crate::features::mentions::messenger::fake::RecordingGuild;

    fn admin_selection(values: &[u64]) -> MenuSelection {
        MenuSelection::new(
            REMOVE_CHANNEL_MENU_ID,
            UserId(1),
            Some(Permissions::ADMINISTRATOR),
            values.iter().map(|v| v.to_string()).collect(),
        )
    }

    fn handler_with(ids: &[u64]) -> (MessageComponentHandler, Arc<CommandContext>) {
        let context = Arc::new(CommandContext::default());
        for id in ids {
            context.mentions.add_channel(ChannelId(*id));
        }
        (MessageComponentHandler::new(context.clone()), context)
    }

    #[tokio::test]
    async fn test_remove_two_of_three() {
        let (handler, context) = handler_with(&[1, 2, 3]);
        let guild = RecordingGuild::new()
            .with_channel(1, "general")
            .with_channel(2, "lobby")
            .with_channel(3, "intro");

        let reply = handler
            .handle_selection(&guild, &admin_selection(&[1, 3]))
            .await
            .unwrap();

        assert_eq!(
            reply,
            InteractionReply::ChannelsRemoved {
                names: vec!["general".into(), "intro".into()],
                remaining: 1,
            }
        );
        assert_eq!(context.mentions.list_channels(), vec![ChannelId(2)]);
    }

    #[tokio::test]
    async fn test_unresolvable_channel_reported_by_id() {
        let (handler, _context) = handler_with(&[42]);
        let reply = handler
            .handle_selection(&RecordingGuild::new(), &admin_selection(&[42]))
            .await
            .unwrap();

        assert_eq!(
            reply,
            InteractionReply::ChannelsRemoved {
                names: vec!["42".into()],
                remaining: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_repeated_selection_removes_nothing() {
        let (handler, _context) = handler_with(&[1]);
        let guild = RecordingGuild::new().with_channel(1, "general");

        handler
            .handle_selection(&guild, &admin_selection(&[1]))
            .await
            .unwrap();
        let reply = handler
            .handle_selection(&guild, &admin_selection(&[1]))
            .await
            .unwrap();

        assert_eq!(reply.notice_text(), Some(NOTHING_REMOVED_REPLY));
    }

    #[tokio::test]
    async fn test_garbage_values_ignored() {
        let (handler, context) = handler_with(&[1]);
        let selection = MenuSelection::new(
            REMOVE_CHANNEL_MENU_ID,
            UserId(1),
            Some(Permissions::ADMINISTRATOR),
            vec!["not-an-id".into()],
        );
        let reply = handler
            .handle_selection(&RecordingGuild::new(), &selection)
            .await
            .unwrap();

        assert_eq!(reply.notice_text(), Some(NOTHING_REMOVED_REPLY));
        assert_eq!(context.mentions.channel_count(), 1);
    }

    #[tokio::test]
    async fn test_non_admin_selection_rejected() {
        let (handler, context) = handler_with(&[1]);
        let selection = MenuSelection::new(
            REMOVE_CHANNEL_MENU_ID,
            UserId(1),
            Some(Permissions::MANAGE_CHANNELS),
            vec!["1".into()],
        );
        let reply = handler
            .handle_selection(&RecordingGuild::new(), &selection)
            .await
            .unwrap();

        assert_eq!(reply.notice_text(), Some(NOT_ADMINISTRATOR_REPLY));
        assert!(context.mentions.contains(ChannelId(1)));
    }

    #[tokio::test]
    async fn test_unknown_component() {
        let (handler, _context) = handler_with(&[]);
        let selection =
            MenuSelection::new("mystery", UserId(1), Some(Permissions::ADMINISTRATOR), vec![]);
        let reply = handler
            .handle_selection(&RecordingGuild::new(), &selection)
            .await
            .unwrap();

        assert_eq!(reply.notice_text(), Some(UNKNOWN_COMPONENT_REPLY));
    }

    #[test]
    fn test_create_removal_menu() {
        let options = vec![
            MenuOption::new("general", "1", "Remove #general"),
            MenuOption::new("lobby", "2", "Remove #lobby"),
        ];
        let components = MessageComponentHandler::create_removal_menu(&options);
        assert_eq!(components.0.len(), 1, "Should have 1 action row");

        let menu = &components.0[0]["components"][0];
        assert_eq!(menu["custom_id"].as_str(), Some(REMOVE_CHANNEL_MENU_ID));
        assert_eq!(menu["min_values"].as_u64(), Some(1));
        assert_eq!(menu["max_values"].as_u64(), Some(2));
    }
}
