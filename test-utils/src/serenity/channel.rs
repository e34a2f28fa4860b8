//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::{ChannelType, GuildChannel};

/// Builder for the gateway JSON of a guild channel.
///
/// # Example
///
/// ```rust,ignore
/// let chat = TestChannelBuilder::new(1, 21, "chat", ChannelType::Text)
///     .parent(20)
///     .topic("Talk here")
///     .role_overwrite(1, 0, 1024)
///     .build();
/// ```
pub struct TestChannelBuilder {
    guild_id: u64,
    channel_id: u64,
    name: String,
    kind: ChannelType,
    parent_id: Option<u64>,
    position: u16,
    topic: Option<String>,
    nsfw: bool,
    rate_limit_per_user: Option<u16>,
    bitrate: Option<u32>,
    user_limit: Option<u32>,
    overwrites: Vec<serde_json::Value>,
}

impl TestChannelBuilder {
    /// Creates a top-level channel at position 0 without overwrites.
    ///
    /// Voice channels default to a 64 kbps bitrate and no user limit.
    pub fn new(guild_id: u64, channel_id: u64, name: &str, kind: ChannelType) -> Self {
        let voice = kind == ChannelType::Voice;

        Self {
            guild_id,
            channel_id,
            name: name.to_string(),
            kind,
            parent_id: None,
            position: 0,
            topic: None,
            nsfw: false,
            rate_limit_per_user: None,
            bitrate: voice.then_some(64_000),
            user_limit: voice.then_some(0),
            overwrites: Vec::new(),
        }
    }

    pub fn parent(mut self, parent_id: u64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn position(mut self, position: u16) -> Self {
        self.position = position;
        self
    }

    pub fn topic(mut self, topic: &str) -> Self {
        self.topic = Some(topic.to_string());
        self
    }

    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    pub fn rate_limit_per_user(mut self, seconds: u16) -> Self {
        self.rate_limit_per_user = Some(seconds);
        self
    }

    pub fn bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    pub fn user_limit(mut self, user_limit: u32) -> Self {
        self.user_limit = Some(user_limit);
        self
    }

    /// Adds a permission overwrite targeting a role.
    pub fn role_overwrite(self, role_id: u64, allow: u64, deny: u64) -> Self {
        self.overwrite(role_id, 0, allow, deny)
    }

    /// Adds a permission overwrite targeting a member.
    pub fn member_overwrite(self, user_id: u64, allow: u64, deny: u64) -> Self {
        self.overwrite(user_id, 1, allow, deny)
    }

    fn overwrite(mut self, target_id: u64, kind: u8, allow: u64, deny: u64) -> Self {
        self.overwrites.push(serde_json::json!({
            "id": target_id.to_string(),
            "type": kind,
            "allow": allow.to_string(),
            "deny": deny.to_string(),
        }));
        self
    }

    /// Builds the channel JSON, usable on its own or inside a guild.
    pub fn json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.channel_id.to_string(),
            "guild_id": self.guild_id.to_string(),
            "type": u8::from(self.kind),
            "name": self.name,
            "position": self.position,
            "parent_id": self.parent_id.map(|id| id.to_string()),
            "permission_overwrites": self.overwrites,
            "topic": self.topic,
            "nsfw": self.nsfw,
            "rate_limit_per_user": self.rate_limit_per_user,
            "bitrate": self.bitrate,
            "user_limit": self.user_limit,
            "flags": 0,
            "available_tags": [],
            "applied_tags": [],
        })
    }

    /// Builds the Serenity channel.
    ///
    /// # Panics
    /// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
    pub fn build(&self) -> GuildChannel {
        serde_json::from_value(self.json())
            .expect("Failed to create test channel - invalid JSON structure")
    }
}

/// Creates a test Serenity GuildChannel without parent or overwrites.
///
/// # Arguments
/// - `guild_id` - ID of the guild the channel belongs to
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
/// - `kind` - Channel type
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
pub fn create_test_channel(
    guild_id: u64,
    channel_id: u64,
    name: &str,
    kind: ChannelType,
) -> GuildChannel {
    TestChannelBuilder::new(guild_id, channel_id, name, kind).build()
}
