use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000005_create_profile_table::Profile,
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
                        .table(Feedback::Table)
                        .if_not_exists()
                        .col(pk_auto(Feedback::Id))
                        .col(string(Feedback::Type))
                        .col(string(Feedback::Title))
                        .col(text(Feedback::Content))
                        .col(string(Feedback::Status))
                        .col(integer(Feedback::AuthorId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_feedback_author_id")
                                .from(Feedback::Table, Feedback::AuthorId)
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
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feedback {
    Table,
    Id,
    Type,
    Title,
    Content,
    Status,
    AuthorId,
}
