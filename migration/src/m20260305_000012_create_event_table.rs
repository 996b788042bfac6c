use sea_orm_migration::{prelude::*, schema::*};

use super::{
    common::bookkeeping,
    m20260302_000003_create_location_table::Location,
    m20260302_000004_create_team_table::Team,
    m20260302_000005_create_profile_table::Profile,
    m20260305_000011_create_path_table::Path,
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
                        .table(Event::Table)
                        .if_not_exists()
                        .col(pk_auto(Event::Id))
                        .col(string(Event::Type))
                        .col(string(Event::Name))
                        .col(text_null(Event::Description))
                        .col(date_time(Event::StartDate))
                        .col(date_time(Event::EndDate))
                        .col(string_null(Event::MeetingPoint))
                        .col(integer(Event::LocationId))
                        .col(integer(Event::OrganizerId))
                        .col(integer(Event::TeamId))
                        .col(integer_null(Event::PathId))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_event_location_id")
                                .from(Event::Table, Event::LocationId)
                                .to(Location::Table, Location::Id)
                                .on_delete(ForeignKeyAction::NoAction)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_event_organizer_id")
                                .from(Event::Table, Event::OrganizerId)
                                .to(Profile::Table, Profile::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_event_team_id")
                                .from(Event::Table, Event::TeamId)
                                .to(Team::Table, Team::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_event_path_id")
                                .from(Event::Table, Event::PathId)
                                .to(Path::Table, Path::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                )
                .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Type,
    Name,
    Description,
    StartDate,
    EndDate,
    MeetingPoint,
    LocationId,
    OrganizerId,
    TeamId,
    PathId,
}
