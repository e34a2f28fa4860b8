//! Guild template repository for database operations.
//!
//! Templates are stored with their snapshot serialized as JSON text. All methods return
//! domain models, decoding the snapshot at the repository boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{guild::GuildSnapshot, template::GuildTemplate};

/// Repository for guild template database operations.
pub struct GuildTemplateRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> GuildTemplateRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a snapshot under a new template name.
    ///
    /// The source guild ID and name are taken from the snapshot.
    ///
    /// # Arguments
    /// - `name` - Unique template name
    /// - `snapshot` - Guild structure to store
    ///
    /// # Returns
    /// - `Ok(GuildTemplate)` - The stored template
    /// - `Err(DbErr::Custom)` - Failed to serialize the snapshot
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn create(&self, name: String, snapshot: &GuildSnapshot) -> Result<GuildTemplate, DbErr> {
        let encoded = serde_json::to_string(snapshot)
            .map_err(|e| DbErr::Custom(format!("Failed to encode template snapshot: {}", e)))?;

        let entity = entity::guild_template::ActiveModel {
            name: ActiveValue::Set(name),
            source_guild_id: ActiveValue::Set(snapshot.guild_id.to_string()),
            source_guild_name: ActiveValue::Set(snapshot.name.clone()),
            snapshot: ActiveValue::Set(encoded),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        GuildTemplate::from_entity(entity)
    }

    /// Finds a template by name.
    ///
    /// # Returns
    /// - `Ok(Some(GuildTemplate))` - Template found
    /// - `Ok(None)` - No template with that name
    /// - `Err(DbErr)` - Database error or undecodable row
    pub async fn find_by_name(&self, name: &str) -> Result<Option<GuildTemplate>, DbErr> {
        let entity = entity::prelude::GuildTemplate::find()
            .filter(entity::guild_template::Column::Name.eq(name))
            .one(self.db)
            .await?;

        entity.map(GuildTemplate::from_entity).transpose()
    }

    /// Gets all templates, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildTemplate>)` - Templates ordered by creation time descending
    /// - `Err(DbErr)` - Database error or undecodable row
    pub async fn get_all(&self) -> Result<Vec<GuildTemplate>, DbErr> {
        let entities = entity::prelude::GuildTemplate::find()
            .order_by_desc(entity::guild_template::Column::CreatedAt)
            .order_by_desc(entity::guild_template::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(GuildTemplate::from_entity)
            .collect()
    }

    /// Deletes a template by name.
    ///
    /// # Returns
    /// - `Ok(true)` - Template deleted
    /// - `Ok(false)` - No template with that name
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildTemplate::delete_many()
            .filter(entity::guild_template::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
