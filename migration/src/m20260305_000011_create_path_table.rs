use sea_orm_migration::{prelude::*, schema::*};

use super::common::bookkeeping;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                bookkeeping(
                    Table::create()
                        .table(Path::Table)
                        .if_not_exists()
                        .col(pk_auto(Path::Id))
                        .col(string_uniq(Path::Name))
                        .col(text(Path::Data))
                )
                .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Path::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Path {
    Table,
    Id,
    Name,
    Data,
}
