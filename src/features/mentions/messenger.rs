//! Guild-scoped access to Discord channels
//!
//! The welcome flow and the command handlers only need to resolve channel
//! names and send/delete messages; these traits keep them independent of a
//! live gateway connection.

use anyhow::Result;
use async_trait::async_trait;
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::id::{ChannelId, GuildId, MessageId};
use std::sync::Arc;

/// Resolves channels of one guild
pub trait ChannelDirectory: Send + Sync {
    /// Live name of the channel, or `None` if it no longer exists in this guild
    fn channel_name(&self, channel_id: ChannelId) -> Option<String>;
}

/// Sends and deletes messages in channels of one guild
#[async_trait]
pub trait GuildMessenger: ChannelDirectory {
    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<MessageId>;

    async fn delete_message(&self, channel_id: ChannelId, message_id: MessageId) -> Result<()>;
}

/// Serenity-backed implementation reading channels from the gateway cache
#[derive(Clone)]
pub struct SerenityGuild {
    cache: Arc<Cache>,
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityGuild {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>, guild_id: GuildId) -> Self {
        Self {
            cache,
            http,
            guild_id,
        }
    }
}

impl ChannelDirectory for SerenityGuild {
    fn channel_name(&self, channel_id: ChannelId) -> Option<String> {
        self.cache
            .guild_channel(channel_id)
            .filter(|channel| channel.guild_id == self.guild_id)
            .map(|channel| channel.name)
    }
}

#[async_trait]
impl GuildMessenger for SerenityGuild {
    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<MessageId> {
        let message = channel_id.say(&self.http, content).await?;
        Ok(message.id)
    }

    async fn delete_message(&self, channel_id: ChannelId, message_id: MessageId) -> Result<()> {
        channel_id.delete_message(&self.http, message_id).await?;
        Ok(())
    }
}
