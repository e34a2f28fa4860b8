use serde::{Deserialize, Serialize};

/// Outcome of a replication run against one guild.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReplicationReportDto {
    #[serde(
        serialize_with = "crate::model::discord::serialize_u64_as_string",
        deserialize_with = "crate::model::discord::deserialize_u64_from_string"
    )]
    pub guild_id: u64,
    pub guild_name: String,
    /// Number of entities created or deleted successfully.
    pub succeeded: usize,
    pub failed: Vec<EntityFailureDto>,
}

/// Entity whose create or delete call failed.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct EntityFailureDto {
    pub name: String,
    pub error: String,
}
