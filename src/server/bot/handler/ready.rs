//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The handler
//! logs the connection and advertises the bot's purpose through its presence.

use serenity::all::{ActivityData, Context, OnlineStatus, Ready};

/// Activity shown as "Watching ..." in the bot's presence.
const PRESENCE_ACTIVITY: &str = "guild structures to clone";

/// Handles the ready event when the bot connects to Discord.
///
/// Guilds listed in the ready payload are still unavailable at this point; their
/// full data arrives through subsequent `guild_create` events.
///
/// # Arguments
/// - `ctx` - Discord context for setting the presence
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.tag(),
        ready.guilds.len()
    );

    ctx.set_presence(
        Some(ActivityData::watching(PRESENCE_ACTIVITY)),
        OnlineStatus::Online,
    );
}
