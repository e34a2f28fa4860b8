//! Guild directory backed by Serenity's gateway cache.

use std::sync::Arc;

use serenity::all::{Cache, GuildId};

use crate::server::{
    model::guild::GuildSnapshot, service::replication::remote::GuildDirectory,
};

/// Resolves guilds from the bot's cache.
///
/// Only guilds the bot is a member of and that have been delivered through
/// `guild_create` are visible. Snapshots evaluate capabilities for the bot user.
#[derive(Clone)]
pub struct CacheGuildDirectory {
    cache: Arc<Cache>,
}

impl CacheGuildDirectory {
    pub fn new(cache: Arc<Cache>) -> Self {
        Self { cache }
    }
}

impl GuildDirectory for CacheGuildDirectory {
    fn lookup(&self, guild_id: u64) -> Option<GuildSnapshot> {
        // Discord IDs are never 0 and GuildId::new rejects it
        if guild_id == 0 {
            return None;
        }

        let bot_id = self.cache.current_user().id;

        self.cache
            .guild(GuildId::new(guild_id))
            .map(|guild| GuildSnapshot::from_guild(&guild, bot_id))
    }

    fn guilds(&self) -> Vec<GuildSnapshot> {
        self.cache
            .guilds()
            .into_iter()
            .filter_map(|guild_id| self.lookup(guild_id.get()))
            .collect()
    }
}
