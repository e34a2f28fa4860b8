//! Discord bot integration.
//!
//! The bot keeps a gateway connection open so Serenity's cache holds an up to date
//! view of every guild the bot is a member of. The replication engine reads guild
//! structure from that cache through [`directory::CacheGuildDirectory`] and mutates
//! destination guilds over REST through [`remote::SerenityRemote`].
//!
//! The bot is initialized during startup and runs in a separate tokio task so it
//! does not block the status HTTP server.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, role and channel events that keep the cache populated
//! - `GUILD_MEMBERS` - The bot's own member entry, used to evaluate its permissions (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice channel state for cached voice channels
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod directory;
pub mod handler;
pub mod remote;
pub mod start;
