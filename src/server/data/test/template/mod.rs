use crate::server::{
    data::template::GuildTemplateRepository,
    model::guild::{ChannelKind, ChannelSnapshot, GuildSnapshot, RoleSnapshot},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_name;
mod find_by_name;
mod get_all;

/// Snapshot with one role, one category and one nested channel.
fn snapshot(guild_id: u64, name: &str) -> GuildSnapshot {
    GuildSnapshot {
        guild_id,
        name: name.to_string(),
        member_count: 12,
        administrator: true,
        max_bitrate: 96_000,
        roles: vec![RoleSnapshot {
            role_id: 10,
            name: "Mod".to_string(),
            color: 0x3498DB,
            hoist: true,
            permissions: 8,
            mentionable: false,
            position: 1,
            managed: false,
            editable: true,
        }],
        channels: vec![
            ChannelSnapshot {
                channel_id: 20,
                name: "General".to_string(),
                kind: ChannelKind::Category,
                parent_id: None,
                position: 0,
                topic: None,
                nsfw: false,
                rate_limit_per_user: 0,
                bitrate: 0,
                user_limit: 0,
                overwrites: Vec::new(),
            },
            ChannelSnapshot {
                channel_id: 21,
                name: "chat".to_string(),
                kind: ChannelKind::Text,
                parent_id: Some(20),
                position: 0,
                topic: Some("Talk here".to_string()),
                nsfw: false,
                rate_limit_per_user: 5,
                bitrate: 0,
                user_limit: 0,
                overwrites: Vec::new(),
            },
        ],
    }
}
