//! Event fixtures.

use chrono::{Duration, NaiveDateTime};
use entity::{event, sea_orm_active_enums::EventType};

use super::timestamp;

/// Default event name.
pub const DEFAULT_NAME: &str = "Sunday ride";

/// Default start, one week after the fixture timestamp.
pub fn default_start_date() -> NaiveDateTime {
    (timestamp() + Duration::days(7)).naive_utc()
}

/// Creates a ride event model with default values.
pub fn entity() -> event::Model {
    entity_builder().build()
}

/// Creates an event builder for customization.
pub fn entity_builder() -> EventEntityBuilder {
    EventEntityBuilder::default()
}

/// Builder for customized event models.
pub struct EventEntityBuilder {
    id: i32,
    kind: EventType,
    name: String,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    location_id: i32,
    organizer_id: i32,
    team_id: i32,
    path_id: Option<i32>,
}

impl Default for EventEntityBuilder {
    fn default() -> Self {
        let start_date = default_start_date();
        Self {
            id: 1,
            kind: EventType::Ride,
            name: DEFAULT_NAME.to_string(),
            start_date,
            end_date: start_date + Duration::hours(6),
            location_id: 1,
            organizer_id: 1,
            team_id: 1,
            path_id: None,
        }
    }
}

impl EventEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn kind(mut self, kind: EventType) -> Self {
        self.kind = kind;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn start_date(mut self, start_date: NaiveDateTime) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: NaiveDateTime) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn location_id(mut self, location_id: i32) -> Self {
        self.location_id = location_id;
        self
    }

    pub fn organizer_id(mut self, organizer_id: i32) -> Self {
        self.organizer_id = organizer_id;
        self
    }

    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = team_id;
        self
    }

    pub fn path_id(mut self, path_id: Option<i32>) -> Self {
        self.path_id = path_id;
        self
    }

    pub fn build(self) -> event::Model {
        event::Model {
            id: self.id,
            kind: self.kind,
            name: self.name,
            description: None,
            start_date: self.start_date,
            end_date: self.end_date,
            meeting_point: None,
            location_id: self.location_id,
            organizer_id: self.organizer_id,
            team_id: self.team_id,
            path_id: self.path_id,
            deleted: false,
            deleted_at: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }
}
