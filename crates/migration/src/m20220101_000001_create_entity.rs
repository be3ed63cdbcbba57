//! Create `entity` table.
//!
//! The single business table: a store-assigned bigint id plus one nullable
//! text attribute.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entity::Table)
                    .if_not_exists()
                    .col(big_integer(Entity::Id).primary_key().auto_increment())
                    .col(ColumnDef::new(Entity::Field).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Entity::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Entity { Table, Id, Field }
