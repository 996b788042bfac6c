use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000005_create_profile_table::Profile,
    m20260306_000016_create_post_table::Post,
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
                        .table(Comment::Table)
                        .if_not_exists()
                        .col(pk_auto(Comment::Id))
                        .col(string(Comment::Content))
                        .col(boolean(Comment::IsFlagged).default(false))
                        .col(integer(Comment::AuthorId))
                        .col(integer(Comment::PostId))
                        .col(integer_null(Comment::ParentId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_comment_author_id")
                                .from(Comment::Table, Comment::AuthorId)
                                .to(Profile::Table, Profile::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_comment_post_id")
                                .from(Comment::Table, Comment::PostId)
                                .to(Post::Table, Post::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_comment_parent_id")
                                .from(Comment::Table, Comment::ParentId)
                                .to(Comment::Table, Comment::Id)
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
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    Content,
    IsFlagged,
    AuthorId,
    PostId,
    ParentId,
}
