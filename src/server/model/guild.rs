//! Guild structure snapshots.
//!
//! Read-only snapshots of a guild's roles, channels and permission overwrites as
//! seen by the bot at invocation time. Snapshots are taken from Serenity's gateway
//! cache and never written back; the replication engine reads a source snapshot and
//! a destination snapshot and issues create/delete calls against the destination.
//!
//! Snapshots derive serde so they can be persisted verbatim as guild templates.

use serde::{Deserialize, Serialize};
use serenity::all::{
    ChannelType, Guild, GuildChannel, PermissionOverwrite, PermissionOverwriteType, Permissions,
    PremiumTier, Role, RoleId, UserId,
};

/// Bitrate ceiling for guilds without boosts.
const DEFAULT_MAX_BITRATE: u32 = 96_000;

/// Guild feature granting the highest voice bitrate regardless of boost tier.
const VIP_REGIONS_FEATURE: &str = "VIP_REGIONS";

/// Snapshot of a guild's structure as seen by the acting bot user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildSnapshot {
    /// Discord guild ID, also the ID of the implicit "everyone" role.
    pub guild_id: u64,
    /// Guild display name.
    pub name: String,
    /// Approximate member count reported by Discord.
    pub member_count: u64,
    /// Whether the acting bot user holds the Administrator permission (or owns the guild).
    pub administrator: bool,
    /// Highest voice channel bitrate the guild accepts, in bits per second.
    pub max_bitrate: u32,
    /// All roles, including managed roles and the "everyone" role.
    pub roles: Vec<RoleSnapshot>,
    /// All channels of every kind.
    pub channels: Vec<ChannelSnapshot>,
}

/// Role within a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSnapshot {
    pub role_id: u64,
    pub name: String,
    /// RGB color as a 24-bit integer, 0 for no color.
    pub color: u32,
    /// Whether members with this role are displayed separately in the member list.
    pub hoist: bool,
    /// Raw permission bitmask.
    pub permissions: u64,
    pub mentionable: bool,
    /// Position in the role hierarchy (higher = more precedence).
    pub position: u16,
    /// Owned by an integration; never cloned or deleted.
    pub managed: bool,
    /// Whether the acting bot user is allowed to delete this role.
    pub editable: bool,
}

/// Channel kinds relevant to structure replication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Category,
    Text,
    Voice,
    /// Any other channel type (announcement, stage, forum, ...). Deleted on wipe, never created.
    Other,
}

/// Channel within a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    pub channel_id: u64,
    pub name: String,
    pub kind: ChannelKind,
    /// ID of the parent category, if any.
    pub parent_id: Option<u64>,
    pub position: u16,
    pub topic: Option<String>,
    pub nsfw: bool,
    /// Slowmode delay in seconds, 0 when disabled.
    pub rate_limit_per_user: u16,
    /// Voice bitrate in bits per second, 0 for non-voice channels.
    pub bitrate: u32,
    /// Voice user limit, 0 for unlimited.
    pub user_limit: u32,
    /// Permission overwrites in the order Discord returned them.
    pub overwrites: Vec<PermissionOverwriteParam>,
}

/// Target kind of a permission overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteKind {
    Role,
    Member,
}

/// Per-channel permission exception for a role or member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOverwriteParam {
    /// Role or user ID the overwrite applies to.
    pub target_id: u64,
    pub kind: OverwriteKind,
    pub allow: u64,
    pub deny: u64,
}

/// Number of structural entities a clone of a guild would create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuildStructureCounts {
    pub roles: usize,
    pub categories: usize,
    pub channels: usize,
}

impl GuildSnapshot {
    /// Builds a snapshot from a cached Serenity guild.
    ///
    /// Capability flags (`administrator`, per-role `editable`) are computed for
    /// `acting_user`, normally the bot's own user ID. Roles and channels are sorted by
    /// ID so snapshots of the same guild compare equal regardless of cache order.
    ///
    /// # Arguments
    /// - `guild` - Cached guild with roles and channels populated
    /// - `acting_user` - User whose capabilities are evaluated
    ///
    /// # Returns
    /// - `GuildSnapshot` - Detached snapshot of the guild structure
    pub fn from_guild(guild: &Guild, acting_user: UserId) -> Self {
        let capability = ActingCapability::resolve(guild, acting_user);

        let mut roles: Vec<RoleSnapshot> = guild
            .roles
            .values()
            .map(|role| RoleSnapshot::from_role(role, capability.can_edit(role)))
            .collect();
        roles.sort_by_key(|role| role.role_id);

        let mut channels: Vec<ChannelSnapshot> = guild
            .channels
            .values()
            .map(ChannelSnapshot::from_channel)
            .collect();
        channels.sort_by_key(|channel| channel.channel_id);

        let max_bitrate = if guild.features.iter().any(|f| f == VIP_REGIONS_FEATURE) {
            384_000
        } else {
            max_bitrate_for_tier(guild.premium_tier)
        };

        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            member_count: guild.member_count,
            administrator: capability.administrator,
            max_bitrate,
            roles,
            channels,
        }
    }

    /// Returns true if `role_id` is the implicit "everyone" role of this guild.
    pub fn is_everyone_role(&self, role_id: u64) -> bool {
        role_id == self.guild_id
    }

    /// Counts the roles, categories and nested text/voice channels a clone would create.
    pub fn structure_counts(&self) -> GuildStructureCounts {
        GuildStructureCounts {
            roles: self
                .roles
                .iter()
                .filter(|role| !role.managed && !self.is_everyone_role(role.role_id))
                .count(),
            categories: self
                .channels
                .iter()
                .filter(|channel| channel.kind == ChannelKind::Category)
                .count(),
            channels: self
                .channels
                .iter()
                .filter(|channel| {
                    matches!(channel.kind, ChannelKind::Text | ChannelKind::Voice)
                        && channel.parent_id.is_some()
                })
                .count(),
        }
    }
}

impl RoleSnapshot {
    /// Converts a Serenity role, with `editable` evaluated by the caller.
    pub fn from_role(role: &Role, editable: bool) -> Self {
        Self {
            role_id: role.id.get(),
            name: role.name.clone(),
            color: role.colour.0,
            hoist: role.hoist,
            permissions: role.permissions.bits(),
            mentionable: role.mentionable,
            position: role.position,
            managed: role.managed,
            editable,
        }
    }
}

impl ChannelKind {
    /// Maps a Serenity channel type onto the kinds the engine distinguishes.
    pub fn from_channel_type(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Category => Self::Category,
            ChannelType::Text => Self::Text,
            ChannelType::Voice => Self::Voice,
            _ => Self::Other,
        }
    }

    /// Serenity channel type used when creating a channel of this kind.
    ///
    /// Returns `None` for [`ChannelKind::Other`], which is never created.
    pub fn channel_type(self) -> Option<ChannelType> {
        match self {
            Self::Category => Some(ChannelType::Category),
            Self::Text => Some(ChannelType::Text),
            Self::Voice => Some(ChannelType::Voice),
            Self::Other => None,
        }
    }
}

impl ChannelSnapshot {
    /// Converts a Serenity guild channel.
    ///
    /// Overwrites of a target type Serenity does not model are dropped.
    pub fn from_channel(channel: &GuildChannel) -> Self {
        Self {
            channel_id: channel.id.get(),
            name: channel.name.clone(),
            kind: ChannelKind::from_channel_type(channel.kind),
            parent_id: channel.parent_id.map(|id| id.get()),
            position: channel.position,
            topic: channel.topic.clone(),
            nsfw: channel.nsfw,
            rate_limit_per_user: channel.rate_limit_per_user.unwrap_or(0),
            bitrate: channel.bitrate.unwrap_or(0),
            user_limit: channel.user_limit.unwrap_or(0),
            overwrites: channel
                .permission_overwrites
                .iter()
                .filter_map(PermissionOverwriteParam::from_overwrite)
                .collect(),
        }
    }
}

impl PermissionOverwriteParam {
    /// Converts a Serenity overwrite, returning `None` for unknown target types.
    pub fn from_overwrite(overwrite: &PermissionOverwrite) -> Option<Self> {
        let (target_id, kind) = match overwrite.kind {
            PermissionOverwriteType::Role(id) => (id.get(), OverwriteKind::Role),
            PermissionOverwriteType::Member(id) => (id.get(), OverwriteKind::Member),
            _ => return None,
        };

        Some(Self {
            target_id,
            kind,
            allow: overwrite.allow.bits(),
            deny: overwrite.deny.bits(),
        })
    }

    /// Converts into a Serenity overwrite for channel creation.
    ///
    /// Permission bits unknown to the Serenity version in use are dropped.
    pub fn into_overwrite(self) -> PermissionOverwrite {
        let kind = match self.kind {
            OverwriteKind::Role => PermissionOverwriteType::Role(RoleId::new(self.target_id)),
            OverwriteKind::Member => PermissionOverwriteType::Member(UserId::new(self.target_id)),
        };

        PermissionOverwrite {
            allow: Permissions::from_bits_truncate(self.allow),
            deny: Permissions::from_bits_truncate(self.deny),
            kind,
        }
    }
}

/// Maximum voice bitrate unlocked by each boost tier.
fn max_bitrate_for_tier(tier: PremiumTier) -> u32 {
    match tier {
        PremiumTier::Tier1 => 128_000,
        PremiumTier::Tier2 => 256_000,
        PremiumTier::Tier3 => 384_000,
        _ => DEFAULT_MAX_BITRATE,
    }
}

/// What the acting user may do in a guild.
struct ActingCapability {
    owner: bool,
    administrator: bool,
    manage_roles: bool,
    /// Position of the acting user's highest role, 0 if it has none.
    highest_position: u16,
}

impl ActingCapability {
    fn resolve(guild: &Guild, user: UserId) -> Self {
        let owner = guild.owner_id == user;

        let member_roles: Vec<&Role> = guild
            .members
            .get(&user)
            .map(|member| {
                member
                    .roles
                    .iter()
                    .filter_map(|id| guild.roles.get(id))
                    .collect()
            })
            .unwrap_or_default();

        let everyone = guild.roles.get(&RoleId::new(guild.id.get()));
        let permissions = everyone
            .into_iter()
            .chain(member_roles.iter().copied())
            .fold(Permissions::empty(), |acc, role| acc | role.permissions);

        let administrator = owner || permissions.administrator();

        Self {
            owner,
            administrator,
            manage_roles: administrator || permissions.manage_roles(),
            highest_position: member_roles
                .iter()
                .map(|role| role.position)
                .max()
                .unwrap_or(0),
        }
    }

    /// Roles strictly below the acting user's highest role can be edited; the owner
    /// can edit everything that isn't managed by an integration.
    fn can_edit(&self, role: &Role) -> bool {
        if role.managed {
            return false;
        }

        self.owner || (self.manage_roles && self.highest_position > role.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{
        channel::TestChannelBuilder,
        create_test_channel, create_test_guild,
        guild::{TestGuildBuilder, DEFAULT_OWNER_ID},
        role::{create_test_role, test_role_json},
    };

    const GUILD_ID: u64 = 1;
    const BOT_ID: u64 = 555;

    const ADMINISTRATOR: u64 = 1 << 3;
    const VIEW_CHANNEL: u64 = 1 << 10;

    fn guild_builder() -> TestGuildBuilder {
        TestGuildBuilder::new(GUILD_ID, "Source")
            .role(test_role_json(GUILD_ID, "@everyone", 0, 0, 0, false))
            .role(test_role_json(10, "Mod", 0x3498db, 2, ADMINISTRATOR, false))
            .role(test_role_json(11, "Music Bot", 0, 1, 0, true))
            .channel(TestChannelBuilder::new(GUILD_ID, 20, "General", ChannelType::Category).json())
            .channel(
                TestChannelBuilder::new(GUILD_ID, 21, "chat", ChannelType::Text)
                    .parent(20)
                    .topic("Talk here")
                    .rate_limit_per_user(5)
                    .role_overwrite(GUILD_ID, 0, VIEW_CHANNEL)
                    .member_overwrite(BOT_ID, VIEW_CHANNEL, 0)
                    .json(),
            )
            .channel(
                TestChannelBuilder::new(GUILD_ID, 22, "Lobby", ChannelType::Voice)
                    .parent(20)
                    .user_limit(10)
                    .json(),
            )
            .channel(TestChannelBuilder::new(GUILD_ID, 23, "rules", ChannelType::Text).json())
    }

    /// Tests that the guild owner is treated as administrator with full edit rights.
    ///
    /// Expected: administrator true, non-managed roles editable, managed role not editable
    #[test]
    fn owner_can_edit_unmanaged_roles() {
        let guild = guild_builder().owner_id(BOT_ID).build();

        let snapshot = GuildSnapshot::from_guild(&guild, UserId::new(BOT_ID));

        assert!(snapshot.administrator);
        assert_eq!(snapshot.roles.len(), 3);
        let editable: Vec<(u64, bool)> = snapshot
            .roles
            .iter()
            .map(|role| (role.role_id, role.editable))
            .collect();
        assert_eq!(editable, vec![(GUILD_ID, true), (10, true), (11, false)]);
    }

    /// Tests that a user without roles gets only the "everyone" role's permissions.
    ///
    /// Expected: administrator false, no role editable
    #[test]
    fn member_without_roles_is_not_administrator() {
        let guild = guild_builder().build();

        let snapshot = GuildSnapshot::from_guild(&guild, UserId::new(BOT_ID));

        assert_ne!(BOT_ID, DEFAULT_OWNER_ID);
        assert!(!snapshot.administrator);
        assert!(snapshot.roles.iter().all(|role| !role.editable));
    }

    /// Tests conversion of channel attributes and permission overwrites.
    ///
    /// Expected: channels sorted by ID with kinds, parents and overwrites preserved
    #[test]
    fn converts_channels() {
        let guild = guild_builder().build();

        let snapshot = GuildSnapshot::from_guild(&guild, UserId::new(BOT_ID));

        let ids: Vec<u64> = snapshot.channels.iter().map(|c| c.channel_id).collect();
        assert_eq!(ids, vec![20, 21, 22, 23]);

        let chat = &snapshot.channels[1];
        assert_eq!(chat.kind, ChannelKind::Text);
        assert_eq!(chat.parent_id, Some(20));
        assert_eq!(chat.topic.as_deref(), Some("Talk here"));
        assert_eq!(chat.rate_limit_per_user, 5);
        assert_eq!(
            chat.overwrites,
            vec![
                PermissionOverwriteParam {
                    target_id: GUILD_ID,
                    kind: OverwriteKind::Role,
                    allow: 0,
                    deny: VIEW_CHANNEL,
                },
                PermissionOverwriteParam {
                    target_id: BOT_ID,
                    kind: OverwriteKind::Member,
                    allow: VIEW_CHANNEL,
                    deny: 0,
                },
            ]
        );

        let lobby = &snapshot.channels[2];
        assert_eq!(lobby.kind, ChannelKind::Voice);
        assert_eq!(lobby.bitrate, 64_000);
        assert_eq!(lobby.user_limit, 10);
    }

    /// Tests the maximum bitrate derived from boost tier and the VIP feature.
    ///
    /// Expected: 96 kbps unboosted, 256 kbps at tier 2, 384 kbps with VIP_REGIONS
    #[test]
    fn derives_max_bitrate() {
        let unboosted = create_test_guild(GUILD_ID, "A");
        let tier_two = TestGuildBuilder::new(GUILD_ID, "B").premium_tier(2).build();
        let vip = TestGuildBuilder::new(GUILD_ID, "C")
            .feature(VIP_REGIONS_FEATURE)
            .build();
        let bot = UserId::new(BOT_ID);

        assert_eq!(GuildSnapshot::from_guild(&unboosted, bot).max_bitrate, 96_000);
        assert_eq!(GuildSnapshot::from_guild(&tier_two, bot).max_bitrate, 256_000);
        assert_eq!(GuildSnapshot::from_guild(&vip, bot).max_bitrate, 384_000);
    }

    /// Tests counting the entities a clone would create.
    ///
    /// Expected: 1 role, 1 category and 2 nested channels; managed, everyone and
    /// top-level entities excluded
    #[test]
    fn counts_clonable_structure() {
        let guild = guild_builder().build();

        let counts = GuildSnapshot::from_guild(&guild, UserId::new(BOT_ID)).structure_counts();

        assert_eq!(
            counts,
            GuildStructureCounts {
                roles: 1,
                categories: 1,
                channels: 2,
            }
        );
    }

    /// Tests role conversion of color and permission bits.
    ///
    /// Expected: fields copied, editable as passed
    #[test]
    fn converts_role() {
        let role = create_test_role(10, "Mod", 0x3498db, 2);

        let snapshot = RoleSnapshot::from_role(&role, false);

        assert_eq!(snapshot.role_id, 10);
        assert_eq!(snapshot.color, 0x3498db);
        assert_eq!(snapshot.position, 2);
        assert_eq!(snapshot.permissions, 0);
        assert!(!snapshot.editable);
    }

    /// Tests that channel types the engine does not create map to `Other`.
    ///
    /// Expected: announcement channel converted with kind Other and no parent
    #[test]
    fn maps_unsupported_channel_types_to_other() {
        let channel = create_test_channel(GUILD_ID, 30, "news", ChannelType::News);

        let snapshot = ChannelSnapshot::from_channel(&channel);

        assert_eq!(snapshot.kind, ChannelKind::Other);
        assert_eq!(snapshot.parent_id, None);
        assert!(snapshot.overwrites.is_empty());
    }
}
