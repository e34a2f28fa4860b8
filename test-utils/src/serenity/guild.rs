//! Test factory for creating Serenity Guild objects.

use serenity::all::Guild;

/// Default owner of test guilds.
pub const DEFAULT_OWNER_ID: u64 = 100000000000000000;

/// Builder for Serenity guilds with roles and channels.
///
/// No members are included, so the acting user's capabilities are derived from
/// ownership and the "everyone" role only.
///
/// # Example
///
/// ```rust,ignore
/// let guild = TestGuildBuilder::new(1, "Source")
///     .owner_id(42)
///     .premium_tier(2)
///     .role(test_role_json(1, "@everyone", 0, 0, 0, false))
///     .build();
/// ```
pub struct TestGuildBuilder {
    guild_id: u64,
    name: String,
    owner_id: u64,
    member_count: u64,
    premium_tier: u8,
    features: Vec<String>,
    roles: Vec<serde_json::Value>,
    channels: Vec<serde_json::Value>,
}

impl TestGuildBuilder {
    pub fn new(guild_id: u64, name: &str) -> Self {
        Self {
            guild_id,
            name: name.to_string(),
            owner_id: DEFAULT_OWNER_ID,
            member_count: 100,
            premium_tier: 0,
            features: Vec::new(),
            roles: Vec::new(),
            channels: Vec::new(),
        }
    }

    pub fn owner_id(mut self, owner_id: u64) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn member_count(mut self, member_count: u64) -> Self {
        self.member_count = member_count;
        self
    }

    /// Sets the boost tier (0-3).
    pub fn premium_tier(mut self, premium_tier: u8) -> Self {
        self.premium_tier = premium_tier;
        self
    }

    pub fn feature(mut self, feature: &str) -> Self {
        self.features.push(feature.to_string());
        self
    }

    /// Adds a role, see [`crate::serenity::role::test_role_json`].
    pub fn role(mut self, role: serde_json::Value) -> Self {
        self.roles.push(role);
        self
    }

    /// Adds a channel, see [`crate::serenity::channel::TestChannelBuilder::json`].
    pub fn channel(mut self, channel: serde_json::Value) -> Self {
        self.channels.push(channel);
        self
    }

    /// Builds the Serenity guild.
    ///
    /// # Panics
    /// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
    pub fn build(self) -> Guild {
        serde_json::from_value(serde_json::json!({
            "id": self.guild_id.to_string(),
            "name": self.name,
            "icon": null,
            "owner_id": self.owner_id.to_string(),
            "afk_timeout": 300,
            "verification_level": 0,
            "default_message_notifications": 0,
            "explicit_content_filter": 0,
            "roles": self.roles,
            "emojis": [],
            "stickers": [],
            "features": self.features,
            "mfa_level": 0,
            "system_channel_flags": 0,
            "premium_tier": self.premium_tier,
            "premium_subscription_count": 0,
            "premium_progress_bar_enabled": false,
            "preferred_locale": "en-US",
            "nsfw_level": 0,
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "large": false,
            "member_count": self.member_count,
            "voice_states": [],
            "channels": self.channels,
            "threads": [],
            "presences": [],
            "max_presences": 25000,
            "max_members": 100000,
            "unavailable": false,
            "members": [],
            "stage_instances": [],
            "guild_scheduled_events": [],
        }))
        .expect("Failed to create test guild - invalid JSON structure")
    }
}

/// Creates a test Serenity Guild without roles or channels.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
pub fn create_test_guild(guild_id: u64, name: &str) -> Guild {
    TestGuildBuilder::new(guild_id, name).build()
}
