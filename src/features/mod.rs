//! Feature modules

pub mod mentions;

pub use mentions::{
    ChannelDirectory, DeletionScheduler, GuildMessenger, MentionSettings, SerenityGuild,
    WelcomeAnnouncer, WelcomeReport,
};
