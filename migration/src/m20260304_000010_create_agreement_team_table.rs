use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000004_create_team_table::Team,
    m20260304_000009_create_agreement_table::Agreement,
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
                        .table(AgreementTeam::Table)
                        .if_not_exists()
                        .col(pk_auto(AgreementTeam::Id))
                        .col(integer(AgreementTeam::AgreementId))
                        .col(integer(AgreementTeam::TeamId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_agreement_team_agreement_id")
                                .from(AgreementTeam::Table, AgreementTeam::AgreementId)
                                .to(Agreement::Table, Agreement::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_agreement_team_team_id")
                                .from(AgreementTeam::Table, AgreementTeam::TeamId)
                                .to(Team::Table, Team::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .index(
                            Index::create()
                                .name("idx_agreement_team_agreement_id_team_id")
                                .col(AgreementTeam::AgreementId)
                                .col(AgreementTeam::TeamId)
                                .unique(),
                        )
                )
                .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AgreementTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AgreementTeam {
    Table,
    Id,
    AgreementId,
    TeamId,
}
