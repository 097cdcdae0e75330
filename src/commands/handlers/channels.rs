//! Mention channel handlers
//!
//! Handles: setchannel, removechannel
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::context::CommandContext;
use crate::commands::handler::{CommandInvocation, SlashCommandHandler};
use crate::commands::registry::UNKNOWN_COMMAND_REPLY;
use crate::core::{InteractionReply, MenuOption};
use crate::features::mentions::{ChannelDirectory, MentionSettings};

/// Discord allows at most 25 options in one select menu
pub const MAX_MENU_OPTIONS: usize = 25;

pub const INVALID_CHANNEL_REPLY: &str = "Invalid channel selected!";
pub const NO_CHANNELS_REPLY: &str = "No channels are set for mentions!";
pub const DELETED_CHANNEL_LABEL: &str = "Deleted Channel";

/// Handler for adding and removing mention channels
pub struct ChannelHandler;

#[async_trait]
impl SlashCommandHandler for ChannelHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["setchannel", "removechannel"]
    }

    async fn handle(
        &self,
        ctx: &CommandContext,
        channels: &dyn ChannelDirectory,
        invocation: &CommandInvocation,
    ) -> Result<InteractionReply> {
        match invocation.name.as_str() {
            "setchannel" => Ok(self.handle_set_channel(ctx, channels, invocation)),
            "removechannel" => Ok(self.handle_remove_channel(ctx, channels, invocation)),
            _ => Ok(InteractionReply::notice(UNKNOWN_COMMAND_REPLY)),
        }
    }
}

impl ChannelHandler {
    /// Handle /setchannel command
    fn handle_set_channel(
        &self,
        ctx: &CommandContext,
        channels: &dyn ChannelDirectory,
        invocation: &CommandInvocation,
    ) -> InteractionReply {
        let request_id = invocation.request_id;
        let Some(channel) = &invocation.channel else {
            return InteractionReply::notice(INVALID_CHANNEL_REPLY);
        };

        let name = channel
            .name
            .clone()
            .or_else(|| channels.channel_name(channel.id))
            .unwrap_or_else(|| channel.id.to_string());

        if !ctx.mentions.add_channel(channel.id) {
            return InteractionReply::notice(format!("#{name} is already in the mention list!"));
        }

        let total = ctx.mentions.channel_count();
        info!("[{request_id}] Added #{name} ({}) to mention list, {total} total", channel.id);

        InteractionReply::ChannelAdded {
            name,
            channel_id: channel.id,
            total,
        }
    }

    /// Handle /removechannel command
    fn handle_remove_channel(
        &self,
        ctx: &CommandContext,
        channels: &dyn ChannelDirectory,
        invocation: &CommandInvocation,
    ) -> InteractionReply {
        let tracked = ctx.mentions.channel_count();
        if tracked == 0 {
            return InteractionReply::notice(NO_CHANNELS_REPLY);
        }

        let options = removal_options(&ctx.mentions, channels);
        info!(
            "[{}] Showing removal menu with {} of {tracked} channels",
            invocation.request_id,
            options.len()
        );

        InteractionReply::RemovalMenu { tracked, options }
    }
}

/// Menu options for the watched channels, labelled with live channel names
pub fn removal_options(settings: &MentionSettings, channels: &dyn ChannelDirectory) -> Vec<MenuOption> {
    settings
        .list_channels()
        .into_iter()
        .take(MAX_MENU_OPTIONS)
        .map(|id| match channels.channel_name(id) {
            Some(name) => MenuOption::new(name.clone(), id.to_string(), format!("Remove #{name}")),
            None => MenuOption::new(DELETED_CHANNEL_LABEL, id.to_string(), "Channel not found"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handler::ResolvedChannel;
    use serenity::model::id::{ChannelId, UserId};
    use serenity::model::permissions::Permissions;
    use std::collections::HashMap;

    struct Names(HashMap<ChannelId, String>);

    impl Names {
        fn of(pairs: &[(u64, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(id, name)| (ChannelId(*id), name.to_string()))
                    .collect(),
            )
        }
    }

    impl ChannelDirectory for Names {
        fn channel_name(&self, channel_id: ChannelId) -> Option<String> {
            self.0.get(&channel_id).cloned()
        }
    }

    fn set_channel(id: u64, name: &str) -> CommandInvocation {
        CommandInvocation::new("setchannel", UserId(1), Some(Permissions::ADMINISTRATOR)).with_channel(
            ResolvedChannel {
                id: ChannelId(id),
                name: Some(name.to_string()),
            },
        )
    }

    fn remove_channel() -> CommandInvocation {
        CommandInvocation::new("removechannel", UserId(1), Some(Permissions::ADMINISTRATOR))
    }

    #[tokio::test]
    async fn test_set_channel_adds_and_confirms() {
        let ctx = CommandContext::default();
        let reply = ChannelHandler
            .handle(&ctx, &Names::of(&[]), &set_channel(10, "general"))
            .await
            .unwrap();

        assert_eq!(
            reply,
            InteractionReply::ChannelAdded {
                name: "general".into(),
                channel_id: ChannelId(10),
                total: 1,
            }
        );
        assert!(ctx.mentions.contains(ChannelId(10)));
    }

    #[tokio::test]
    async fn test_set_channel_twice_rejected() {
        let ctx = CommandContext::default();
        let names = Names::of(&[]);
        ChannelHandler
            .handle(&ctx, &names, &set_channel(10, "general"))
            .await
            .unwrap();
        let reply = ChannelHandler
            .handle(&ctx, &names, &set_channel(10, "general"))
            .await
            .unwrap();

        assert_eq!(
            reply.notice_text(),
            Some("#general is already in the mention list!")
        );
        assert_eq!(ctx.mentions.channel_count(), 1);
    }

    #[tokio::test]
    async fn test_set_channel_without_option_is_invalid() {
        let ctx = CommandContext::default();
        let invocation =
            CommandInvocation::new("setchannel", UserId(1), Some(Permissions::ADMINISTRATOR));
        let reply = ChannelHandler
            .handle(&ctx, &Names::of(&[]), &invocation)
            .await
            .unwrap();

        assert_eq!(reply.notice_text(), Some(INVALID_CHANNEL_REPLY));
        assert_eq!(ctx.mentions.channel_count(), 0);
    }

    #[tokio::test]
    async fn test_set_channel_falls_back_to_live_name() {
        let ctx = CommandContext::default();
        let invocation =
            CommandInvocation::new("setchannel", UserId(1), Some(Permissions::ADMINISTRATOR))
                .with_channel(ResolvedChannel {
                    id: ChannelId(3),
                    name: None,
                });
        let reply = ChannelHandler
            .handle(&ctx, &Names::of(&[(3, "lobby")]), &invocation)
            .await
            .unwrap();

        assert!(matches!(reply, InteractionReply::ChannelAdded { name, .. } if name == "lobby"));
    }

    #[tokio::test]
    async fn test_remove_channel_empty_set() {
        let ctx = CommandContext::default();
        let reply = ChannelHandler
            .handle(&ctx, &Names::of(&[]), &remove_channel())
            .await
            .unwrap();

        assert_eq!(reply.notice_text(), Some(NO_CHANNELS_REPLY));
    }

    #[tokio::test]
    async fn test_remove_channel_builds_menu_with_deleted_placeholder() {
        let ctx = CommandContext::default();
        ctx.mentions.add_channel(ChannelId(1));
        ctx.mentions.add_channel(ChannelId(2));

        let reply = ChannelHandler
            .handle(&ctx, &Names::of(&[(1, "general")]), &remove_channel())
            .await
            .unwrap();

        assert_eq!(
            reply,
            InteractionReply::RemovalMenu {
                tracked: 2,
                options: vec![
                    MenuOption::new("general", "1", "Remove #general"),
                    MenuOption::new(DELETED_CHANNEL_LABEL, "2", "Channel not found"),
                ],
            }
        );
    }

    #[test]
    fn test_removal_options_capped() {
        let settings = MentionSettings::new();
        for id in 1..=30 {
            settings.add_channel(ChannelId(id));
        }
        let options = removal_options(&settings, &Names::of(&[]));
        assert_eq!(options.len(), MAX_MENU_OPTIONS);
        assert_eq!(options[0].value, "1");
    }

    #[tokio::test]
    async fn test_unrouted_name_gets_unknown_reply() {
        let ctx = CommandContext::default();
        let invocation = CommandInvocation::new("start", UserId(1), Some(Permissions::ADMINISTRATOR));

        let reply = ChannelHandler
            .handle(&ctx, &Names::of(&[]), &invocation)
            .await
            .unwrap();
        assert_eq!(reply.notice_text(), Some(UNKNOWN_COMMAND_REPLY));
        assert_eq!(ctx.mentions.channel_count(), 0);
    }
}
