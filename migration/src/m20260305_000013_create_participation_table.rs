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
                        .table(Participation::Table)
                        .if_not_exists()
                        .col(pk_auto(Participation::Id))
                        .col(boolean(Participation::Attended).default(false))
                        .col(integer(Participation::MemberId))
                        .col(integer(Participation::EventId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_participation_member_id")
                                .from(Participation::Table, Participation::MemberId)
                                .to(Profile::Table, Profile::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_participation_event_id")
                                .from(Participation::Table, Participation::EventId)
                                .to(Event::Table, Event::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .index(
                            Index::create()
                                .name("idx_participation_member_id_event_id")
                                .col(Participation::MemberId)
                                .col(Participation::EventId)
                                .unique(),
                        )
                )
                .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Participation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Participation {
    Table,
    Id,
    Attended,
    MemberId,
    EventId,
}
