use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildTemplate::Id))
                    .col(string_uniq(GuildTemplate::Name))
                    .col(string(GuildTemplate::SourceGuildId))
                    .col(string(GuildTemplate::SourceGuildName))
                    .col(text(GuildTemplate::Snapshot))
                    .col(
                        timestamp_with_time_zone(GuildTemplate::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GuildTemplate {
    Table,
    Id,
    Name,
    SourceGuildId,
    SourceGuildName,
    Snapshot,
    CreatedAt,
}
