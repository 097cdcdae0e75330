//! # Feature: Welcome Mentions
//!
//! Pings new members in administrator-chosen text channels and deletes the
//! ping a moment later. Channels and the on/off switch live in memory only.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: true (`/start`, `/stop`)
//!
//! ## Changelog
//! - 1.0.0: Watched channels, transient welcome pings and deletions flushed on shutdown

pub mod deletion;
pub mod messenger;
pub mod store;
pub mod welcome;

pub use deletion::DeletionScheduler;
pub use messenger::{ChannelDirectory, GuildMessenger, SerenityGuild};
pub use store::MentionSettings;
pub use welcome::{welcome_message, WelcomeAnnouncer, WelcomeReport, WELCOME_DELETE_DELAY};
