use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a stored guild template.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct GuildTemplateDto {
    pub name: String,
    #[serde(
        serialize_with = "crate::model::discord::serialize_u64_as_string",
        deserialize_with = "crate::model::discord::deserialize_u64_from_string"
    )]
    pub source_guild_id: u64,
    pub source_guild_name: String,
    /// Roles the template creates, excluding managed and "everyone" roles.
    pub roles: usize,
    pub categories: usize,
    /// Text and voice channels nested in a category.
    pub channels: usize,
    pub created_at: DateTime<Utc>,
}

/// Request to capture a guild into a new template.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CaptureTemplateDto {
    #[serde(
        serialize_with = "crate::model::discord::serialize_u64_as_string",
        deserialize_with = "crate::model::discord::deserialize_u64_from_string"
    )]
    pub guild_id: u64,
    /// Template name, generated from the guild ID and current time when absent.
    #[serde(default)]
    pub name: Option<String>,
}

/// Request to replay a template onto a destination guild.
///
/// Every toggle defaults to enabled.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ApplyTemplateDto {
    #[serde(
        serialize_with = "crate::model::discord::serialize_u64_as_string",
        deserialize_with = "crate::model::discord::deserialize_u64_from_string"
    )]
    pub destination_id: u64,
    #[serde(default = "enabled")]
    pub clone_roles: bool,
    #[serde(default = "enabled")]
    pub clone_channels: bool,
    #[serde(default = "enabled")]
    pub clone_permissions: bool,
}

fn enabled() -> bool {
    true
}
