//! Activation handlers
//!
//! Handles: start, stop

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::context::CommandContext;
use crate::commands::handler::{CommandInvocation, SlashCommandHandler};
use crate::commands::registry::UNKNOWN_COMMAND_REPLY;
use crate::core::InteractionReply;
use crate::features::mentions::ChannelDirectory;

pub const ACTIVATED_REPLY: &str = "✅ Mentions activated!";
pub const DEACTIVATED_REPLY: &str = "❌ Mentions deactivated!";

/// Handler for switching welcome mentions on and off
pub struct ActivationHandler;

#[async_trait]
impl SlashCommandHandler for ActivationHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "stop"]
    }

    async fn handle(
        &self,
        ctx: &CommandContext,
        _channels: &dyn ChannelDirectory,
        invocation: &CommandInvocation,
    ) -> Result<InteractionReply> {
        let (active, reply) = match invocation.name.as_str() {
            "start" => (true, ACTIVATED_REPLY),
            "stop" => (false, DEACTIVATED_REPLY),
            _ => return Ok(InteractionReply::notice(UNKNOWN_COMMAND_REPLY)),
        };

        ctx.mentions.set_active(active);
        info!(
            "[{}] Mentions {} by {}",
            invocation.request_id,
            if active { "activated" } else { "deactivated" },
            invocation.user_id
        );

        Ok(InteractionReply::notice(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::model::id::{ChannelId, UserId};
    use serenity::model::permissions::Permissions;

    struct NoChannels;

    impl ChannelDirectory for NoChannels {
        fn channel_name(&self, _channel_id: ChannelId) -> Option<String> {
            None
        }
    }

    fn invoke(name: &str) -> CommandInvocation {
        CommandInvocation::new(name, UserId(1), Some(Permissions::ADMINISTRATOR))
    }

    #[tokio::test]
    async fn test_start_and_stop() {
        let ctx = CommandContext::default();

        let reply = ActivationHandler.handle(&ctx, &NoChannels, &invoke("start")).await.unwrap();
        assert_eq!(reply.notice_text(), Some(ACTIVATED_REPLY));
        assert!(ctx.mentions.is_active());

        let reply = ActivationHandler.handle(&ctx, &NoChannels, &invoke("stop")).await.unwrap();
        assert_eq!(reply.notice_text(), Some(DEACTIVATED_REPLY));
        assert!(!ctx.mentions.is_active());
    }

    #[tokio::test]
    async fn test_repeated_stop_stays_inactive() {
        let ctx = CommandContext::default();
        for _ in 0..3 {
            ActivationHandler.handle(&ctx, &NoChannels, &invoke("stop")).await.unwrap();
            assert!(!ctx.mentions.is_active());
        }
    }

    #[tokio::test]
    async fn test_unrouted_name_leaves_state_alone() {
        let ctx = CommandContext::default();
        ctx.mentions.set_active(true);

        let reply = ActivationHandler
            .handle(&ctx, &NoChannels, &invoke("setchannel"))
            .await
            .unwrap();
        assert_eq!(reply.notice_text(), Some(UNKNOWN_COMMAND_REPLY));
        assert!(ctx.mentions.is_active());
    }
}
