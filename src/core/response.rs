//! Interaction replies and their Discord rendering
//!
//! Handlers return an [`InteractionReply`] instead of talking to Discord
//! directly; the event handler renders it onto the interaction response.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Reply model for mention-channel commands and the removal menu

use serenity::builder::{CreateComponents, CreateEmbed, CreateInteractionResponseData};
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::id::ChannelId;

use crate::core::embeds::{channel_added_embed, channels_removed_embed, removal_menu_embed};
use crate::message_components::MessageComponentHandler;

/// Discord limit on select menu option labels and descriptions
pub const MENU_TEXT_LIMIT: usize = 100;

/// One entry of the channel removal select menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub value: String,
    pub description: String,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: truncate_menu_text(&label.into()),
            value: value.into(),
            description: truncate_menu_text(&description.into()),
        }
    }
}

/// What a handler wants sent back to the invoking user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionReply {
    /// Ephemeral plain-text notice
    Notice(String),
    /// Confirmation embed after `/setchannel`
    ChannelAdded {
        name: String,
        channel_id: ChannelId,
        total: usize,
    },
    /// Embed plus multi-select menu listing the watched channels
    RemovalMenu {
        tracked: usize,
        options: Vec<MenuOption>,
    },
    /// Summary replacing the removal menu once a selection is applied
    ChannelsRemoved {
        names: Vec<String>,
        remaining: usize,
    },
}

impl InteractionReply {
    pub fn notice(text: impl Into<String>) -> Self {
        Self::Notice(text.into())
    }

    /// Text of a [`InteractionReply::Notice`], if this is one
    pub fn notice_text(&self) -> Option<&str> {
        match self {
            Self::Notice(text) => Some(text),
            _ => None,
        }
    }

    /// Response type to use when answering a message component interaction
    ///
    /// A removal summary edits the menu message in place so it cannot be used again.
    pub fn component_response_kind(&self) -> InteractionResponseType {
        match self {
            Self::ChannelsRemoved { .. } => InteractionResponseType::UpdateMessage,
            _ => InteractionResponseType::ChannelMessageWithSource,
        }
    }

    /// Discord-facing pieces of this reply
    pub fn parts(&self) -> ResponseParts {
        match self {
            Self::Notice(text) => ResponseParts {
                ephemeral: true,
                content: Some(text.clone()),
                ..Default::default()
            },
            Self::ChannelAdded {
                name,
                channel_id,
                total,
            } => ResponseParts {
                ephemeral: true,
                embeds: vec![channel_added_embed(name, *channel_id, *total)],
                ..Default::default()
            },
            Self::RemovalMenu { tracked, options } => ResponseParts {
                ephemeral: true,
                embeds: vec![removal_menu_embed(*tracked)],
                components: Some(MessageComponentHandler::create_removal_menu(options)),
                ..Default::default()
            },
            // Replaces the menu message, so the empty component set removes the menu
            Self::ChannelsRemoved { names, remaining } => ResponseParts {
                embeds: vec![channels_removed_embed(names, *remaining)],
                components: Some(CreateComponents::default()),
                ..Default::default()
            },
        }
    }

    /// Fill interaction response data for this reply
    pub fn render<'a, 'b>(
        &self,
        data: &'b mut CreateInteractionResponseData<'a>,
    ) -> &'b mut CreateInteractionResponseData<'a> {
        let parts = self.parts();
        if parts.ephemeral {
            data.ephemeral(true);
        }
        if let Some(content) = parts.content {
            data.content(content);
        }
        for embed in parts.embeds {
            data.add_embed(embed);
        }
        if let Some(components) = parts.components {
            data.set_components(components);
        }
        data
    }
}

/// Content, embeds and components of a reply, applied as-is by [`InteractionReply::render`]
#[derive(Debug, Clone, Default)]
pub struct ResponseParts {
    pub ephemeral: bool,
    pub content: Option<String>,
    pub embeds: Vec<CreateEmbed>,
    /// `Some` replaces the message components; an empty set removes them
    pub components: Option<CreateComponents>,
}

/// Truncate to the select menu text limit without splitting a character
pub fn truncate_menu_text(text: &str) -> String {
    if text.chars().count() <= MENU_TEXT_LIMIT {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MENU_TEXT_LIMIT - 1).collect();
    truncated.push('…');
    truncated
}
