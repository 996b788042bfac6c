use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000005_create_profile_table::Profile,
    m20260303_000006_create_brand_table::Brand,
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
                        .table(Motorcycle::Table)
                        .if_not_exists()
                        .col(pk_auto(Motorcycle::Id))
                        .col(string(Motorcycle::Model))
                        .col(string_uniq(Motorcycle::LicensePlate))
                        .col(string_null(Motorcycle::Photo))
                        .col(integer(Motorcycle::BrandId))
                        .col(integer(Motorcycle::OwnerId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_motorcycle_brand_id")
                                .from(Motorcycle::Table, Motorcycle::BrandId)
                                .to(Brand::Table, Brand::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_motorcycle_owner_id")
                                .from(Motorcycle::Table, Motorcycle::OwnerId)
                                .to(Profile::Table, Profile::Id)
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
            .drop_table(Table::drop().table(Motorcycle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Motorcycle {
    Table,
    Id,
    Model,
    LicensePlate,
    Photo,
    BrandId,
    OwnerId,
}
