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
                        .table(Company::Table)
                        .if_not_exists()
                        .col(pk_auto(Company::Id))
                        .col(string_uniq(Company::Name))
                        .col(string(Company::ContactName))
                        .col(string(Company::ContactTelephone))
                        .col(string_null(Company::ContactAddress))
                        .col(integer(Company::LocationId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_company_location_id")
                                .from(Company::Table, Company::LocationId)
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
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Company {
    Table,
    Id,
    Name,
    ContactName,
    ContactTelephone,
    ContactAddress,
    LocationId,
}
