//! Role and channel mutations over Discord's REST API.
//!
//! Converts engine parameters into Serenity builders and Serenity results back
//! into snapshots. Every request carries an audit log reason so moderators can
//! tell replication changes apart from manual edits.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateChannel, EditRole, GuildId, Permissions, RoleId},
    async_trait,
    http::Http,
};

use crate::server::{
    error::replication::RemoteError,
    model::{
        guild::{ChannelKind, ChannelSnapshot, RoleSnapshot},
        replication::{CreateChannelParam, CreateRoleParam},
    },
    service::replication::remote::{ChannelApi, RoleApi},
};

const AUDIT_LOG_REASON: &str = "Guild structure replication";

/// Discord REST client implementing the engine's mutation traits.
#[derive(Clone)]
pub struct SerenityRemote {
    http: Arc<Http>,
}

impl SerenityRemote {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RoleApi for SerenityRemote {
    async fn create_role(
        &self,
        guild_id: u64,
        param: CreateRoleParam,
    ) -> Result<RoleSnapshot, RemoteError> {
        let role = GuildId::new(guild_id)
            .create_role(&self.http, role_builder(param))
            .await?;

        // A role the bot just created sits below its own highest role
        Ok(RoleSnapshot::from_role(&role, true))
    }

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), RemoteError> {
        GuildId::new(guild_id)
            .delete_role(&self.http, RoleId::new(role_id))
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ChannelApi for SerenityRemote {
    async fn create_channel(
        &self,
        guild_id: u64,
        param: CreateChannelParam,
    ) -> Result<ChannelSnapshot, RemoteError> {
        let builder = channel_builder(param)?;

        let channel = GuildId::new(guild_id)
            .create_channel(&self.http, builder)
            .await?;

        Ok(ChannelSnapshot::from_channel(&channel))
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), RemoteError> {
        ChannelId::new(channel_id).delete(&self.http).await?;

        Ok(())
    }
}

/// Builds the role creation request.
///
/// Permission bits unknown to Serenity are dropped.
fn role_builder(param: CreateRoleParam) -> EditRole<'static> {
    EditRole::new()
        .name(param.name)
        .colour(param.color)
        .hoist(param.hoist)
        .mentionable(param.mentionable)
        .permissions(Permissions::from_bits_truncate(param.permissions))
        .audit_log_reason(AUDIT_LOG_REASON)
}

/// Builds the channel creation request.
///
/// # Returns
/// - `Ok(CreateChannel)` - Request for a category, text or voice channel
/// - `Err(RemoteError::Rejected)` - `param.kind` is a kind the engine never creates
fn channel_builder(param: CreateChannelParam) -> Result<CreateChannel<'static>, RemoteError> {
    let kind = param.kind.channel_type().ok_or_else(|| {
        RemoteError::Rejected(format!(
            "Cannot create channel {}: unsupported channel type",
            param.name
        ))
    })?;

    let mut builder = CreateChannel::new(param.name)
        .kind(kind)
        .position(param.position)
        .nsfw(param.nsfw)
        .permissions(
            param
                .overwrites
                .into_iter()
                .map(|overwrite| overwrite.into_overwrite()),
        )
        .audit_log_reason(AUDIT_LOG_REASON);

    if let Some(parent_id) = param.parent_id {
        builder = builder.category(ChannelId::new(parent_id));
    }
    if let Some(topic) = param.topic {
        builder = builder.topic(topic);
    }
    if let Some(rate_limit) = param.rate_limit_per_user {
        builder = builder.rate_limit_per_user(rate_limit);
    }
    if param.kind == ChannelKind::Voice {
        if let Some(bitrate) = param.bitrate {
            builder = builder.bitrate(bitrate);
        }
        if let Some(user_limit) = param.user_limit {
            builder = builder.user_limit(user_limit);
        }
    }

    Ok(builder)
}
