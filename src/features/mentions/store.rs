//! In-memory mention settings: watched channels plus the active flag.
//!
//! Nothing is persisted; a restart starts from an empty, inactive state.

use dashmap::DashSet;
use serenity::model::id::ChannelId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared mention settings
///
/// Cloning is cheap and every clone sees the same state. Each operation is
/// atomic on its own, so concurrent event tasks can use it without locking.
#[derive(Clone, Default)]
pub struct MentionSettings {
    channels: Arc<DashSet<ChannelId>>,
    active: Arc<AtomicBool>,
}

impl MentionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch a channel. Returns false if it was already watched.
    pub fn add_channel(&self, channel_id: ChannelId) -> bool {
        self.channels.insert(channel_id)
    }

    /// Stop watching the given channels
    ///
    /// Returns the ids that were actually watched and are now removed, in input order.
    pub fn remove_channels<I>(&self, channel_ids: I) -> Vec<ChannelId>
    where
        I: IntoIterator<Item = ChannelId>,
    {
        channel_ids
            .into_iter()
            .filter(|id| self.channels.remove(id).is_some())
            .collect()
    }

    pub fn contains(&self, channel_id: ChannelId) -> bool {
        self.channels.contains(&channel_id)
    }

    /// Watched channel ids, sorted ascending
    pub fn list_channels(&self) -> Vec<ChannelId> {
        let mut ids: Vec<ChannelId> = self.channels.iter().map(|id| *id).collect();
        ids.sort_unstable_by_key(|id| id.0);
        ids
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}
