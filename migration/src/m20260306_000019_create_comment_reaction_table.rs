use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000005_create_profile_table::Profile,
    m20260306_000018_create_comment_table::Comment,
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
                        .table(CommentReaction::Table)
                        .if_not_exists()
                        .col(pk_auto(CommentReaction::Id))
                        .col(string(CommentReaction::Type))
                        .col(integer(CommentReaction::CommentId))
                        .col(integer(CommentReaction::AuthorId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_comment_reaction_comment_id")
                                .from(CommentReaction::Table, CommentReaction::CommentId)
                                .to(Comment::Table, Comment::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_comment_reaction_author_id")
                                .from(CommentReaction::Table, CommentReaction::AuthorId)
                                .to(Profile::Table, Profile::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .index(
                            Index::create()
                                .name("idx_comment_reaction_comment_id_author_id")
                                .col(CommentReaction::CommentId)
                                .col(CommentReaction::AuthorId)
                                .unique(),
                        )
                )
                .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommentReaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommentReaction {
    Table,
    Id,
    Type,
    CommentId,
    AuthorId,
}
