//! Slash command handler trait and invocation data
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Handler trait taking an invocation and returning an `InteractionReply`

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::{
    ApplicationCommandInteraction, CommandDataOption, CommandDataOptionValue,
};
use serenity::model::id::{ChannelId, UserId};
use serenity::model::permissions::Permissions;
use uuid::Uuid;

use super::context::CommandContext;
use crate::core::InteractionReply;
use crate::features::mentions::ChannelDirectory;

/// A channel supplied as a command option and resolved by Discord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannel {
    pub id: ChannelId,
    pub name: Option<String>,
}

/// Everything a handler needs to know about one slash command invocation
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    pub request_id: Uuid,
    pub name: String,
    pub user_id: UserId,
    /// Invoker's computed permissions in the channel; `None` outside a guild
    pub permissions: Option<Permissions>,
    /// Resolved `channel` option, if supplied
    pub channel: Option<ResolvedChannel>,
}

impl CommandInvocation {
    pub fn new(name: impl Into<String>, user_id: UserId, permissions: Option<Permissions>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            name: name.into(),
            user_id,
            permissions,
            channel: None,
        }
    }

    pub fn with_channel(mut self, channel: ResolvedChannel) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Extract the invocation from a serenity slash command interaction
    pub fn from_interaction(command: &ApplicationCommandInteraction) -> Self {
        let permissions = command.member.as_ref().and_then(|m| m.permissions);
        let mut invocation = Self::new(command.data.name.clone(), command.user.id, permissions);
        invocation.channel = get_resolved_channel(&command.data.options, "channel");
        invocation
    }
}

/// Resolved channel for a named channel option
pub fn get_resolved_channel(options: &[CommandDataOption], name: &str) -> Option<ResolvedChannel> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.resolved.as_ref())
        .and_then(|value| match value {
            CommandDataOptionValue::Channel(channel) => Some(ResolvedChannel {
                id: channel.id,
                name: channel.name.clone(),
            }),
            _ => None,
        })
}

/// Trait for slash command handlers
///
/// Each command handler implements this trait to process one or more slash commands.
/// Handlers are registered with a CommandRegistry and dispatched based on command name,
/// after the registry has checked the invoker's permissions.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: &CommandContext,
///         channels: &dyn ChannelDirectory,
///         invocation: &CommandInvocation,
///     ) -> Result<InteractionReply> {
///         Ok(InteractionReply::notice("Pong!"))
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    ///
    /// A handler can process multiple commands if they share logic.
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the slash command
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared command context with the mention settings
    /// * `channels` - Channel lookups for the guild the command came from
    /// * `invocation` - The command invocation to handle
    async fn handle(
        &self,
        ctx: &CommandContext,
        channels: &dyn ChannelDirectory,
        invocation: &CommandInvocation,
    ) -> Result<InteractionReply>;
}
