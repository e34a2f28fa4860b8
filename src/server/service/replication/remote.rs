//! Collaborator interfaces consumed by the replication engine.
//!
//! The engine never talks to Serenity directly. Guild lookups go through a
//! [`GuildDirectory`], mutations through [`RoleApi`] and [`ChannelApi`], and progress
//! messages through a [`ProgressSink`]. The bot provides Serenity-backed
//! implementations; tests provide in-memory fakes.

use serenity::async_trait;

use crate::server::{
    error::replication::RemoteError,
    model::{
        guild::{ChannelSnapshot, GuildSnapshot, RoleSnapshot},
        replication::{CreateChannelParam, CreateRoleParam},
    },
};

/// Resolves guild IDs to structure snapshots.
pub trait GuildDirectory: Send + Sync {
    /// Returns a snapshot of the guild, or `None` if the bot does not know it.
    fn lookup(&self, guild_id: u64) -> Option<GuildSnapshot>;

    /// Returns snapshots of every guild the bot is a member of.
    fn guilds(&self) -> Vec<GuildSnapshot>;
}

/// Role mutations against the remote platform.
#[async_trait]
pub trait RoleApi: Send + Sync {
    async fn create_role(
        &self,
        guild_id: u64,
        param: CreateRoleParam,
    ) -> Result<RoleSnapshot, RemoteError>;

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), RemoteError>;
}

/// Channel mutations against the remote platform.
#[async_trait]
pub trait ChannelApi: Send + Sync {
    async fn create_channel(
        &self,
        guild_id: u64,
        param: CreateChannelParam,
    ) -> Result<ChannelSnapshot, RemoteError>;

    async fn delete_channel(&self, channel_id: u64) -> Result<(), RemoteError>;
}

/// Convenience bound for a client implementing both role and channel mutations.
pub trait RemoteApi: RoleApi + ChannelApi {}

impl<T: RoleApi + ChannelApi> RemoteApi for T {}

/// Receives human-readable progress messages for one invocation.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn notify(&self, message: &str);
}
