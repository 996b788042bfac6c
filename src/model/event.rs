use chrono::{DateTime, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::EventType;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "rodada")]
    pub kind: EventType,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub meeting_point: Option<String>,
    pub location_id: i32,
    /// Profile id of the organizer
    pub organizer_id: i32,
    pub team_id: i32,
    pub path_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventDto {
    #[serde(rename = "type", default)]
    #[schema(value_type = Option<String>)]
    pub kind: Option<EventType>,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub meeting_point: Option<String>,
    pub location_id: i32,
    /// User id of the organizer
    pub organizer_id: i32,
    pub team_id: i32,
    pub path_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventDto {
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<EventType>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<String>)]
    pub meeting_point: Option<Option<String>>,
    pub location_id: Option<i32>,
    /// User id of the new organizer
    pub organizer_id: Option<i32>,
    pub team_id: Option<i32>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<i32>)]
    pub path_id: Option<Option<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParticipationDto {
    pub id: i32,
    pub attended: bool,
    /// Profile id of the participant
    pub member_id: i32,
    pub event_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateParticipationDto {
    #[serde(default)]
    pub attended: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateParticipationDto {
    pub attended: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttendedParamsDto {
    /// Only participations with this attendance flag
    pub attended: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub score: i32,
    pub comment: Option<String>,
    /// Profile id of the author
    pub author_id: i32,
    pub event_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub score: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewDto {
    pub score: Option<i32>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<String>)]
    pub comment: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScoreParamsDto {
    /// Only reviews with this score
    pub score: Option<i32>,
}
