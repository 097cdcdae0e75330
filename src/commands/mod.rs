//! # Command System
//!
//! Slash command (/) handling for Discord interactions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Guarded slash command dispatch with handler trait, context and registry

pub mod context;
pub mod guard;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod slash;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use guard::{require_administrator, AccessDenied};
pub use handler::{CommandInvocation, ResolvedChannel, SlashCommandHandler};
pub use registry::CommandRegistry;

// Re-export commonly used items from submodules
pub use slash::{create_slash_commands, register_global_commands, register_guild_commands};
