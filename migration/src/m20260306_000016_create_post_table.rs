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
                        .table(Post::Table)
                        .if_not_exists()
                        .col(pk_auto(Post::Id))
                        .col(string_uniq(Post::Title))
                        .col(string_uniq(Post::Slug))
                        .col(text(Post::Content))
                        .col(string(Post::Status))
                        .col(string_null(Post::Thumbnail))
                        .col(integer(Post::AuthorId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_post_author_id")
                                .from(Post::Table, Post::AuthorId)
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
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    Title,
    Slug,
    Content,
    Status,
    Thumbnail,
    AuthorId,
}
