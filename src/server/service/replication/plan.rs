//! Phase ordering and per-entity planning.
//!
//! The order of a replication run is data: [`CLONE_PHASES`] and [`RESET_PHASES`] list
//! the phases in the order they execute, each with the toggle that enables it. The
//! functions below select which entities a phase touches, in which order, and build
//! the create parameters with numeric fields clamped to what Discord accepts.

use crate::server::{
    model::{
        guild::{ChannelKind, ChannelSnapshot, GuildSnapshot, PermissionOverwriteParam, RoleSnapshot},
        replication::{CloneOptions, CreateChannelParam, CreateRoleParam, PhaseKind},
    },
    service::replication::{overwrite::translate_overwrites, remap::IdRemapper},
};

/// Role colors are 24-bit RGB values.
const COLOR_MASK: u32 = 0x00FF_FFFF;

/// Lowest bitrate Discord accepts for a voice channel.
const MIN_VOICE_BITRATE: u32 = 8_000;

/// Highest user limit Discord accepts for a voice channel.
const MAX_USER_LIMIT: u32 = 99;

/// Highest slowmode delay Discord accepts, in seconds.
const MAX_RATE_LIMIT_PER_USER: u16 = 21_600;

/// A step of a replication run and the toggle gating it.
#[derive(Clone, Copy)]
pub struct Phase {
    pub kind: PhaseKind,
    pub enabled: fn(&CloneOptions) -> bool,
}

impl Phase {
    pub fn is_enabled(&self, options: &CloneOptions) -> bool {
        (self.enabled)(options)
    }
}

/// Clone order. Roles come first so overwrites can reference them; the channel wipe
/// precedes creation so names don't collide; categories precede the channels nested
/// in them.
pub const CLONE_PHASES: [Phase; 5] = [
    Phase {
        kind: PhaseKind::CreateRoles,
        enabled: |options| options.clone_roles,
    },
    Phase {
        kind: PhaseKind::DeleteChannels,
        enabled: |options| options.clone_channels,
    },
    Phase {
        kind: PhaseKind::CreateCategories,
        enabled: |options| options.clone_channels,
    },
    Phase {
        kind: PhaseKind::CreateTextChannels,
        enabled: |options| options.clone_channels,
    },
    Phase {
        kind: PhaseKind::CreateVoiceChannels,
        enabled: |options| options.clone_channels,
    },
];

/// Reset order: channels first, then roles.
pub const RESET_PHASES: [Phase; 2] = [
    Phase {
        kind: PhaseKind::DeleteChannels,
        enabled: |_| true,
    },
    Phase {
        kind: PhaseKind::DeleteRoles,
        enabled: |_| true,
    },
];

/// Source roles to recreate, highest position first.
///
/// Discord assigns positions by creation order, so creating from the top down keeps
/// the relative hierarchy as close to the source as possible. Managed roles and the
/// "everyone" role are excluded.
pub fn roles_to_create(source: &GuildSnapshot) -> Vec<&RoleSnapshot> {
    let mut roles: Vec<&RoleSnapshot> = source
        .roles
        .iter()
        .filter(|role| !role.managed && !source.is_everyone_role(role.role_id))
        .collect();
    roles.sort_by(|a, b| {
        b.position
            .cmp(&a.position)
            .then_with(|| a.role_id.cmp(&b.role_id))
    });
    roles
}

/// Roles a reset deletes: non-managed, editable, and not the "everyone" role.
pub fn roles_to_delete(guild: &GuildSnapshot) -> Vec<&RoleSnapshot> {
    guild
        .roles
        .iter()
        .filter(|role| !role.managed && role.editable && !guild.is_everyone_role(role.role_id))
        .collect()
}

/// Source categories, in position order.
pub fn categories_to_create(source: &GuildSnapshot) -> Vec<&ChannelSnapshot> {
    channels_by_position(source, ChannelKind::Category, false)
}

/// Source text or voice channels nested under a category, in position order.
///
/// Top-level channels are not replicated.
pub fn nested_channels_to_create(source: &GuildSnapshot, kind: ChannelKind) -> Vec<&ChannelSnapshot> {
    channels_by_position(source, kind, true)
}

fn channels_by_position(
    guild: &GuildSnapshot,
    kind: ChannelKind,
    nested_only: bool,
) -> Vec<&ChannelSnapshot> {
    let mut channels: Vec<&ChannelSnapshot> = guild
        .channels
        .iter()
        .filter(|channel| channel.kind == kind && (!nested_only || channel.parent_id.is_some()))
        .collect();
    channels.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then_with(|| a.channel_id.cmp(&b.channel_id))
    });
    channels
}

/// Overwrites to apply to a recreated channel: translated, or none at all when
/// permissions are not being cloned.
pub fn overwrites_for(
    channel: &ChannelSnapshot,
    options: &CloneOptions,
    remapper: &IdRemapper,
) -> Vec<PermissionOverwriteParam> {
    if options.clone_permissions {
        translate_overwrites(&channel.overwrites, remapper)
    } else {
        Vec::new()
    }
}

/// Builds the create parameters for a source role.
///
/// The permission bitmask is copied verbatim when permissions are cloned and zeroed
/// otherwise; the color is masked to 24 bits.
pub fn role_param(role: &RoleSnapshot, options: &CloneOptions) -> CreateRoleParam {
    CreateRoleParam {
        name: role.name.clone(),
        color: role.color & COLOR_MASK,
        hoist: role.hoist,
        permissions: if options.clone_permissions {
            role.permissions
        } else {
            0
        },
        mentionable: role.mentionable,
    }
}

/// Builds the create parameters for a source category.
pub fn category_param(
    category: &ChannelSnapshot,
    overwrites: Vec<PermissionOverwriteParam>,
) -> CreateChannelParam {
    CreateChannelParam {
        name: category.name.clone(),
        kind: ChannelKind::Category,
        parent_id: None,
        position: category.position,
        topic: None,
        nsfw: false,
        rate_limit_per_user: None,
        bitrate: None,
        user_limit: None,
        overwrites,
    }
}

/// Builds the create parameters for a source text channel under `parent_id`.
pub fn text_param(
    channel: &ChannelSnapshot,
    parent_id: Option<u64>,
    overwrites: Vec<PermissionOverwriteParam>,
) -> CreateChannelParam {
    CreateChannelParam {
        name: channel.name.clone(),
        kind: ChannelKind::Text,
        parent_id,
        position: channel.position,
        topic: channel.topic.clone(),
        nsfw: channel.nsfw,
        rate_limit_per_user: Some(channel.rate_limit_per_user.min(MAX_RATE_LIMIT_PER_USER)),
        bitrate: None,
        user_limit: None,
        overwrites,
    }
}

/// Builds the create parameters for a source voice channel under `parent_id`.
///
/// The bitrate is clamped to `[8000, max_bitrate]` of the destination guild and the
/// user limit to Discord's ceiling.
pub fn voice_param(
    channel: &ChannelSnapshot,
    parent_id: Option<u64>,
    overwrites: Vec<PermissionOverwriteParam>,
    max_bitrate: u32,
) -> CreateChannelParam {
    CreateChannelParam {
        name: channel.name.clone(),
        kind: ChannelKind::Voice,
        parent_id,
        position: channel.position,
        topic: None,
        nsfw: channel.nsfw,
        rate_limit_per_user: None,
        bitrate: Some(
            channel
                .bitrate
                .min(max_bitrate)
                .max(MIN_VOICE_BITRATE.min(max_bitrate)),
        ),
        user_limit: Some(channel.user_limit.min(MAX_USER_LIMIT)),
        overwrites,
    }
}
