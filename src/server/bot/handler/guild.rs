//! Guild availability handler.
//!
//! Fires on bot startup for each guild the bot is already in, when the bot joins a
//! new guild and when a guild becomes available after an outage. Serenity's cache
//! stores the guild before this handler runs, so nothing needs persisting here.

use serenity::all::{Context, Guild};

/// Handles the guild_create event by logging the guild's structure size.
///
/// # Arguments
/// - `_ctx` - Discord context (unused)
/// - `guild` - Guild data from Discord including roles and channels
/// - `is_new` - Whether the bot just joined this guild
pub async fn handle_guild_create(_ctx: Context, guild: Guild, is_new: Option<bool>) {
    tracing::debug!(
        "Guild available: {} ({}) - members: {}, roles: {}, channels: {}, new: {}",
        guild.name,
        guild.id,
        guild.member_count,
        guild.roles.len(),
        guild.channels.len(),
        is_new.unwrap_or(false)
    );
}
