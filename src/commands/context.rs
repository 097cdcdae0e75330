//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Context carrying the mention settings

use crate::features::mentions::MentionSettings;

/// Shared context for all command and component handlers
///
/// Handlers receive the mention settings through this context rather than a
/// global, so tests can run each scenario against fresh state.
#[derive(Clone, Default)]
pub struct CommandContext {
    pub mentions: MentionSettings,
}

impl CommandContext {
    pub fn new(mentions: MentionSettings) -> Self {
        Self { mentions }
    }
}
