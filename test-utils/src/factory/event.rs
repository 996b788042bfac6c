//! Event factory.

use crate::factory::helpers::{next_id, now};
use crate::fixture;
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events organized by a member of the event's team.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::event::Model,
}

impl<'a> EventFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        location_id: i32,
        organizer_id: i32,
        team_id: i32,
    ) -> Self {
        let entity = fixture::event::entity_builder()
            .name(format!("Ride {}", next_id()))
            .location_id(location_id)
            .organizer_id(organizer_id)
            .team_id(team_id)
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn dates(mut self, start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        self.entity.start_date = start_date;
        self.entity.end_date = end_date;
        self
    }

    pub fn path_id(mut self, path_id: i32) -> Self {
        self.entity.path_id = Some(path_id);
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let event = self.entity;
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            kind: ActiveValue::Set(event.kind),
            name: ActiveValue::Set(event.name),
            description: ActiveValue::Set(event.description),
            start_date: ActiveValue::Set(event.start_date),
            end_date: ActiveValue::Set(event.end_date),
            meeting_point: ActiveValue::Set(event.meeting_point),
            location_id: ActiveValue::Set(event.location_id),
            organizer_id: ActiveValue::Set(event.organizer_id),
            team_id: ActiveValue::Set(event.team_id),
            path_id: ActiveValue::Set(event.path_id),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now()),
            updated_at: ActiveValue::Set(now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ride event with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    location_id: i32,
    organizer_id: i32,
    team_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, location_id, organizer_id, team_id)
        .build()
        .await
}
