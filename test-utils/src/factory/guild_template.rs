//! Guild template factory for creating stored test templates.
//!
//! The default snapshot is an empty guild. Use `snapshot()` to store a richer one;
//! the value must have the shape of the application's serialized `GuildSnapshot`.

use crate::{factory::helpers::next_id, fixture};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild templates with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_template::GuildTemplateFactory;
///
/// let template = GuildTemplateFactory::new(&db)
///     .name("weekly")
///     .source_guild(123, "Source")
///     .build()
///     .await?;
/// ```
pub struct GuildTemplateFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    source_guild_id: u64,
    source_guild_name: String,
    snapshot: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl<'a> GuildTemplateFactory<'a> {
    /// Creates a new GuildTemplateFactory with default values.
    ///
    /// Defaults:
    /// - name: `"template_{id}"` where id is auto-incremented
    /// - source guild: `{id}` named `"Guild {id}"`
    /// - snapshot: empty guild matching the source guild
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuildTemplateFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let source_guild_name = format!("Guild {}", id);

        Self {
            db,
            name: format!("template_{}", id),
            source_guild_id: id,
            snapshot: fixture::guild_template::snapshot(id, &source_guild_name),
            source_guild_name,
            created_at: Utc::now(),
        }
    }

    /// Sets the template name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the source guild and resets the snapshot to an empty guild matching it.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the captured guild
    /// - `name` - Display name of the captured guild
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn source_guild(mut self, guild_id: u64, name: impl Into<String>) -> Self {
        self.source_guild_id = guild_id;
        self.source_guild_name = name.into();
        self.snapshot = fixture::guild_template::snapshot(guild_id, &self.source_guild_name);
        self
    }

    /// Sets the stored snapshot JSON.
    pub fn snapshot(mut self, snapshot: serde_json::Value) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the template entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_template::Model)` - Created template entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_template::Model, DbErr> {
        entity::guild_template::ActiveModel {
            name: ActiveValue::Set(self.name),
            source_guild_id: ActiveValue::Set(self.source_guild_id.to_string()),
            source_guild_name: ActiveValue::Set(self.source_guild_name),
            snapshot: ActiveValue::Set(self.snapshot.to_string()),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild template with default values.
///
/// Shorthand for `GuildTemplateFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::guild_template::Model)` - Created template entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_template(db: &DatabaseConnection) -> Result<entity::guild_template::Model, DbErr> {
    GuildTemplateFactory::new(db).build().await
}
