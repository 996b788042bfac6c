use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000002_create_user_table::User,
    m20260302_000004_create_team_table::Team,
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
                        .table(Profile::Table)
                        .if_not_exists()
                        .col(pk_auto(Profile::Id))
                        .col(string(Profile::FirstName))
                        .col(string(Profile::LastName))
                        .col(string_null(Profile::Nickname))
                        .col(string_null(Profile::Telephone))
                        .col(string(Profile::DocumentType))
                        .col(string(Profile::DocumentNumber))
                        .col(string(Profile::Rh))
                        .col(date(Profile::Birthdate))
                        .col(string(Profile::Gender))
                        .col(string_null(Profile::Photo))
                        .col(integer_uniq(Profile::UserId))
                        .col(integer(Profile::TeamId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_profile_user_id")
                                .from(Profile::Table, Profile::UserId)
                                .to(User::Table, User::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_profile_team_id")
                                .from(Profile::Table, Profile::TeamId)
                                .to(Team::Table, Team::Id)
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
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    FirstName,
    LastName,
    Nickname,
    Telephone,
    DocumentType,
    DocumentNumber,
    Rh,
    Birthdate,
    Gender,
    Photo,
    UserId,
    TeamId,
}
