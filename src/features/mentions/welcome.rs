//! Welcome mentions for new guild members

use log::{debug, error, info, warn};
use serenity::model::id::ChannelId;
use std::sync::Arc;
use std::time::Duration;

use super::deletion::DeletionScheduler;
use super::messenger::GuildMessenger;
use super::store::MentionSettings;

/// How long a welcome mention stays visible before it is deleted
pub const WELCOME_DELETE_DELAY: Duration = Duration::from_secs(1);

pub fn welcome_message(mention: &str) -> String {
    format!("Welcome {mention}!")
}

/// Outcome of one member join, per watched channel
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WelcomeReport {
    pub sent: Vec<ChannelId>,
    /// Watched channels that no longer resolve in the guild
    pub skipped: Vec<ChannelId>,
    pub failed: Vec<ChannelId>,
}

impl WelcomeReport {
    pub fn is_empty(&self) -> bool {
        self.sent.is_empty() && self.skipped.is_empty() && self.failed.is_empty()
    }
}

#[derive(Clone)]
pub struct WelcomeAnnouncer {
    settings: MentionSettings,
    deletions: DeletionScheduler,
    delete_after: Duration,
}

impl WelcomeAnnouncer {
    pub fn new(settings: MentionSettings, deletions: DeletionScheduler) -> Self {
        Self {
            settings,
            deletions,
            delete_after: WELCOME_DELETE_DELAY,
        }
    }

    pub fn deletions(&self) -> &DeletionScheduler {
        &self.deletions
    }

    /// Ping `mention` in every watched channel of the member's guild
    ///
    /// Does nothing while mentions are inactive or no channel is watched. Each
    /// channel is handled on its own: a missing channel or a failed send is
    /// logged and the remaining channels are still served.
    pub async fn announce(&self, messenger: Arc<dyn GuildMessenger>, mention: &str) -> WelcomeReport {
        let mut report = WelcomeReport::default();

        if !self.settings.is_active() {
            debug!("Mentions inactive, ignoring join of {mention}");
            return report;
        }
        let channels = self.settings.list_channels();
        if channels.is_empty() {
            debug!("No mention channels configured, ignoring join of {mention}");
            return report;
        }

        let content = welcome_message(mention);
        for channel_id in channels {
            if messenger.channel_name(channel_id).is_none() {
                warn!("Mention channel {channel_id} not found in guild, skipping");
                report.skipped.push(channel_id);
                continue;
            }

            match messenger.send_message(channel_id, &content).await {
                Ok(message_id) => {
                    self.deletions.schedule(
                        Arc::clone(&messenger),
                        channel_id,
                        message_id,
                        self.delete_after,
                    );
                    report.sent.push(channel_id);
                }
                Err(e) => {
                    error!("Failed to send message in channel {channel_id}: {e}");
                    report.failed.push(channel_id);
                }
            }
        }

        info!(
            "👋 Welcomed {mention} in {} channel(s) ({} skipped, {} failed)",
            report.sent.len(),
            report.skipped.len(),
            report.failed.len()
        );
        report
    }
}
