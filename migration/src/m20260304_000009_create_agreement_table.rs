use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260304_000008_create_company_table::Company,
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
                        .table(Agreement::Table)
                        .if_not_exists()
                        .col(pk_auto(Agreement::Id))
                        .col(string_uniq(Agreement::Name))
                        .col(text_null(Agreement::Description))
                        .col(date(Agreement::StartDate))
                        .col(date(Agreement::EndDate))
                        .col(boolean(Agreement::Active).default(true))
                        .col(integer(Agreement::CompanyId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_agreement_company_id")
                                .from(Agreement::Table, Agreement::CompanyId)
                                .to(Company::Table, Company::Id)
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
            .drop_table(Table::drop().table(Agreement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Agreement {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Active,
    CompanyId,
}
