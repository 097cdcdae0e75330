//! Deferred deletion of welcome messages
//!
//! Each scheduled deletion is a tracked task tied to a shutdown token. On
//! shutdown pending deletions stop waiting and run immediately, so no welcome
//! ping is left behind when the process exits cleanly.

use log::{debug, warn};
use serenity::model::id::{ChannelId, MessageId};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use super::messenger::GuildMessenger;

#[derive(Clone)]
pub struct DeletionScheduler {
    tracker: TaskTracker,
    shutdown: CancellationToken,
}

impl DeletionScheduler {
    pub fn new(shutdown: CancellationToken) -> Self {
        Self {
            tracker: TaskTracker::new(),
            shutdown,
        }
    }

    /// Delete `message_id` after `delay`, or as soon as shutdown starts
    ///
    /// Failures (already deleted, missing permission) are logged and dropped.
    pub fn schedule(
        &self,
        messenger: Arc<dyn GuildMessenger>,
        channel_id: ChannelId,
        message_id: MessageId,
        delay: Duration,
    ) {
        let shutdown = self.shutdown.clone();
        self.tracker.spawn(async move {
            tokio::select! {
                _ = sleep(delay) => {}
                _ = shutdown.cancelled() => {
                    debug!("Flushing deletion of message {message_id} in channel {channel_id}");
                }
            }

            if let Err(e) = messenger.delete_message(channel_id, message_id).await {
                debug!("Could not delete welcome message {message_id} in channel {channel_id}: {e}");
            }
        });
    }

    /// Number of deletions still waiting or running
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Cancel the shared token, flush pending deletions and wait up to `grace` for them
    ///
    /// Returns false if some deletions were still running when the grace period ran out.
    pub async fn shutdown(&self, grace: Duration) -> bool {
        self.shutdown.cancel();
        self.tracker.close();
        let pending = self.tracker.len();
        if pending > 0 {
            debug!("Flushing {pending} pending welcome deletion(s)");
        }
        match timeout(grace, self.tracker.wait()).await {
            Ok(()) => true,
            Err(_) => {
                warn!(
                    "⚠️ {} welcome deletion(s) still pending after {grace:?}",
                    self.tracker.len()
                );
                false
            }
        }
    }
}
