use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bot status shown on the root endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct StatusDto {
    pub status: String,
    pub uptime_seconds: u64,
    pub guild_count: usize,
    pub total_members: u64,
}

/// Liveness check response.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
