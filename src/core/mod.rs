//! # Core Module
//!
//! Configuration, reply model and embed builders shared by the bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Config, reply model and embed builders

pub mod config;
pub mod embeds;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use response::{InteractionReply, MenuOption};
