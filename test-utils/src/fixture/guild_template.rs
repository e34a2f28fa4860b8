//! Guild template fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::guild_template;
use serde_json::json;

/// Default test template name.
pub const DEFAULT_NAME: &str = "Test Template";

/// Default source guild ID of the template.
pub const DEFAULT_SOURCE_GUILD_ID: u64 = 987654321;

/// Default source guild name of the template.
pub const DEFAULT_SOURCE_GUILD_NAME: &str = "Source Guild";

/// Serialized snapshot of a guild without roles or channels.
///
/// # Arguments
/// - `guild_id` - ID of the snapshotted guild
/// - `name` - Name of the snapshotted guild
///
/// # Returns
/// - `serde_json::Value` - Snapshot JSON as stored in the `snapshot` column
pub fn snapshot(guild_id: u64, name: &str) -> serde_json::Value {
    json!({
        "guild_id": guild_id,
        "name": name,
        "member_count": 0,
        "administrator": true,
        "max_bitrate": 96000,
        "roles": [],
        "channels": [],
    })
}

/// Creates a guild template entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Template"`
/// - source_guild_id: `"987654321"`
/// - source_guild_name: `"Source Guild"`
/// - snapshot: empty guild matching the source guild
/// - created_at: `2026-01-01T00:00:00Z`
///
/// # Returns
/// - `guild_template::Model` - In-memory template entity
pub fn entity() -> guild_template::Model {
    guild_template::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        source_guild_id: DEFAULT_SOURCE_GUILD_ID.to_string(),
        source_guild_name: DEFAULT_SOURCE_GUILD_NAME.to_string(),
        snapshot: snapshot(DEFAULT_SOURCE_GUILD_ID, DEFAULT_SOURCE_GUILD_NAME).to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}
