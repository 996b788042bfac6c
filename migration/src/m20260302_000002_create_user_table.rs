use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000001_create_role_table::Role,
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
                        .table(User::Table)
                        .if_not_exists()
                        .col(pk_auto(User::Id))
                        .col(string_uniq(User::Username))
                        .col(string_uniq(User::Email))
                        .col(string(User::Password))
                        .col(string(User::Status))
                        .col(integer(User::RoleId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_user_role_id")
                                .from(User::Table, User::RoleId)
                                .to(Role::Table, Role::Id)
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
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    Password,
    Status,
    RoleId,
}
