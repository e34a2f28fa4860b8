//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Builds the gateway JSON of a role.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 24-bit RGB integer
/// - `position` - Role position in the hierarchy (higher = more important)
/// - `permissions` - Raw permission bitmask
/// - `managed` - Whether the role is owned by an integration
///
/// # Returns
/// - `serde_json::Value` - Role JSON, usable on its own or inside a guild
pub fn test_role_json(
    role_id: u64,
    name: &str,
    color: u32,
    position: u16,
    permissions: u64,
    managed: bool,
) -> serde_json::Value {
    serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.to_string(),
        "managed": managed,
        "mentionable": false,
    })
}

/// Creates a test Serenity Role with customizable fields.
///
/// The role is not hoisted, not managed, not mentionable and has no permissions.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 24-bit RGB integer
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: u16) -> Role {
    serde_json::from_value(test_role_json(role_id, name, color, position, 0, false))
        .expect("Failed to create test role - invalid JSON structure")
}
