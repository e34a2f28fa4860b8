use serde::{Deserialize, Serialize};

/// Guild the bot is a member of.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct GuildDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    pub guild_id: u64,
    pub name: String,
    pub member_count: u64,
    /// Whether the bot holds Administrator, required to clone into the guild.
    pub administrator: bool,
}

/// Serializes Discord snowflakes as strings, which JavaScript clients can't represent
/// losslessly as numbers.
pub fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize_u64_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer)?
        .parse::<u64>()
        .map_err(D::Error::custom)
}
