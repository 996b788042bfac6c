use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000003_create_location_table::Location,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                bookkeeping(
                    Table::create()
                        .table(Team::Table)
                        .if_not_exists()
                        .col(pk_auto(Team::Id))
                        .col(string_uniq(Team::Name))
                        .col(integer(Team::LocationId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_team_location_id")
                                .from(Team::Table, Team::LocationId)
                                .to(Location::Table, Location::Id)
                                .on_delete(ForeignKeyAction::NoAction)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                )
                .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Name,
    LocationId,
}
