//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Name-based handler registry with administrator-guarded dispatch

use anyhow::Result;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;

use super::context::CommandContext;
use super::guard::require_administrator;
use super::handler::{CommandInvocation, SlashCommandHandler};
use crate::core::InteractionReply;
use crate::features::mentions::ChannelDirectory;

pub const UNKNOWN_COMMAND_REPLY: &str = "Unknown command.";

/// Registry mapping command names to handlers
///
/// The registry allows handlers to be registered and looked up by command name.
/// Multiple command names can map to the same handler if they share logic.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(ChannelHandler));
/// registry.register(Arc::new(ActivationHandler));
///
/// let reply = registry.dispatch(&ctx, &channels, &invocation).await?;
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create a registry with every built-in handler registered
    pub fn with_default_handlers() -> Self {
        let mut registry = Self::new();
        for handler in super::handlers::create_all_handlers() {
            registry.register(handler);
        }
        registry
    }

    /// Register a handler for its declared command names
    ///
    /// The handler is registered for all names returned by `command_names()`.
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    /// Get handler for a command name
    ///
    /// Returns None if no handler is registered for the given name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Check the invoker's permissions, then route to the matching handler
    ///
    /// Non-administrators get a rejection reply and no handler runs.
    pub async fn dispatch(
        &self,
        ctx: &CommandContext,
        channels: &dyn ChannelDirectory,
        invocation: &CommandInvocation,
    ) -> Result<InteractionReply> {
        let request_id = invocation.request_id;

        if let Err(denied) = require_administrator(invocation.permissions) {
            info!(
                "[{request_id}] Rejected /{} from non-administrator {}",
                invocation.name, invocation.user_id
            );
            return Ok(InteractionReply::notice(denied.reply_text()));
        }

        match self.get(&invocation.name) {
            Some(handler) => handler.handle(ctx, channels, invocation).await,
            None => {
                warn!("[{request_id}] No handler registered for /{}", invocation.name);
                Ok(InteractionReply::notice(UNKNOWN_COMMAND_REPLY))
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
