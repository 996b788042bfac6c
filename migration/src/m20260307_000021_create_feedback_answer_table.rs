use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000005_create_profile_table::Profile,
    m20260307_000020_create_feedback_table::Feedback,
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
                        .table(FeedbackAnswer::Table)
                        .if_not_exists()
                        .col(pk_auto(FeedbackAnswer::Id))
                        .col(text(FeedbackAnswer::Content))
                        .col(integer(FeedbackAnswer::AuthorId))
                        .col(integer_uniq(FeedbackAnswer::FeedbackId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_feedback_answer_author_id")
                                .from(FeedbackAnswer::Table, FeedbackAnswer::AuthorId)
                                .to(Profile::Table, Profile::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_feedback_answer_feedback_id")
                                .from(FeedbackAnswer::Table, FeedbackAnswer::FeedbackId)
                                .to(Feedback::Table, Feedback::Id)
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
            .drop_table(Table::drop().table(FeedbackAnswer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeedbackAnswer {
    Table,
    Id,
    Content,
    AuthorId,
    FeedbackId,
}
