//! Guild template domain model.
//!
//! A template is a stored [`GuildSnapshot`] that can be replayed onto any guild the
//! bot administers. The snapshot is persisted as JSON and decoded at the repository
//! boundary.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::template::GuildTemplateDto,
    server::model::guild::{GuildSnapshot, GuildStructureCounts},
};

/// Stored snapshot of a guild's structure.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildTemplate {
    pub id: i32,
    /// Unique template name.
    pub name: String,
    /// ID of the guild the snapshot was taken from.
    pub source_guild_id: u64,
    pub source_guild_name: String,
    pub snapshot: GuildSnapshot,
    pub created_at: DateTime<Utc>,
}

impl GuildTemplate {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(GuildTemplate)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse source_guild_id or decode the snapshot
    pub fn from_entity(entity: entity::guild_template::Model) -> Result<Self, DbErr> {
        let source_guild_id = entity
            .source_guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse source_guild_id: {}", e)))?;

        let snapshot = serde_json::from_str::<GuildSnapshot>(&entity.snapshot)
            .map_err(|e| DbErr::Custom(format!("Failed to decode template snapshot: {}", e)))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            source_guild_id,
            source_guild_name: entity.source_guild_name,
            snapshot,
            created_at: entity.created_at,
        })
    }

    /// Number of roles, categories and channels applying the template would create.
    pub fn counts(&self) -> GuildStructureCounts {
        self.snapshot.structure_counts()
    }

    /// Converts the template to a summary DTO for API responses.
    pub fn into_dto(self) -> GuildTemplateDto {
        let counts = self.counts();

        GuildTemplateDto {
            name: self.name,
            source_guild_id: self.source_guild_id,
            source_guild_name: self.source_guild_name,
            roles: counts.roles,
            categories: counts.categories,
            channels: counts.channels,
            created_at: self.created_at,
        }
    }
}
