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
                        .table(Location::Table)
                        .if_not_exists()
                        .col(pk_auto(Location::Id))
                        .col(string(Location::Name))
                        .col(string(Location::Type))
                        .col(boolean(Location::IsCapital).default(false))
                        .col(integer_null(Location::DepartmentId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_location_department_id")
                                .from(Location::Table, Location::DepartmentId)
                                .to(Location::Table, Location::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                )
                .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Id,
    Name,
    Type,
    IsCapital,
    DepartmentId,
}
