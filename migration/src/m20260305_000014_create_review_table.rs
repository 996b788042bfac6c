use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000005_create_profile_table::Profile,
    m20260305_000012_create_event_table::Event,
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
                        .table(Review::Table)
                        .if_not_exists()
                        .col(pk_auto(Review::Id))
                        .col(integer(Review::Score))
                        .col(string_null(Review::Comment))
                        .col(integer(Review::AuthorId))
                        .col(integer(Review::EventId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_review_author_id")
                                .from(Review::Table, Review::AuthorId)
                                .to(Profile::Table, Profile::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_review_event_id")
                                .from(Review::Table, Review::EventId)
                                .to(Event::Table, Event::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .index(
                            Index::create()
                                .name("idx_review_author_id_event_id")
                                .col(Review::AuthorId)
                                .col(Review::EventId)
                                .unique(),
                        )
                )
                .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    Score,
    Comment,
    AuthorId,
    EventId,
}
