// Core layer - shared types and configuration
pub mod core;

// Features layer - all feature modules
pub mod features;

// UI components
pub mod message_components;

// Application layer
pub mod commands;

// Liveness endpoint for uptime monitors
pub mod health;

// Re-export core config
pub use core::Config;

// Re-export feature items
pub use features::{
    ChannelDirectory, DeletionScheduler, GuildMessenger, MentionSettings, SerenityGuild,
    WelcomeAnnouncer, WelcomeReport,
};
