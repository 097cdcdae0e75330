//! Embed builders for mention-channel replies
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Added, removal menu and removal summary embeds

use serenity::builder::CreateEmbed;
use serenity::model::id::ChannelId;

pub const COLOR_ADDED: u32 = 0x00FF00;
pub const COLOR_REMOVE_MENU: u32 = 0xFF0000;
pub const COLOR_REMOVED: u32 = 0xFFA500;

/// Confirmation shown after a channel joins the mention list
pub fn channel_added_embed(name: &str, channel_id: ChannelId, total: usize) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .title("✅ Channel Added")
        .color(COLOR_ADDED)
        .description(format!("Added #{name} to mention list"))
        .field("Channel", format!("<#{channel_id}>"), true)
        .field("ID", channel_id.to_string(), true)
        .footer(|f| f.text(format!("Total channels: {total}")));
    embed
}

/// Header shown above the channel removal menu
pub fn removal_menu_embed(tracked: usize) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .title("Remove Mention Channels")
        .color(COLOR_REMOVE_MENU)
        .description(format!("Currently tracking {tracked} channels"));
    embed
}

/// Summary that replaces the removal menu
pub fn channels_removed_embed(names: &[String], remaining: usize) -> CreateEmbed {
    let list = names
        .iter()
        .map(|name| format!("• {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut embed = CreateEmbed::default();
    embed
        .title("🗑️ Channels Removed")
        .color(COLOR_REMOVED)
        .description(format!("Removed {} channel(s):\n{list}", names.len()))
        .footer(|f| f.text(format!("Remaining channels: {remaining}")));
    embed
}
