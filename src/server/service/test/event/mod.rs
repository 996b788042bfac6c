use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::EventType;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::event::{
        CreateEventParams, CreateParticipationParams, CreateReviewParams, UpdateEventParams,
    },
    service::event::{EventService, ParticipationService, ReviewService},
};

mod create;
mod participation;
mod review;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn ride(name: &str, location_id: i32, organizer_user_id: i32, team_id: i32) -> CreateEventParams {
    CreateEventParams {
        kind: EventType::Ride,
        name: name.to_string(),
        description: None,
        start_date: at(10, 7),
        end_date: at(10, 18),
        meeting_point: Some("Parque de El Poblado".to_string()),
        location_id,
        organizer_user_id,
        team_id,
        path_id: None,
    }
}
