//! Event, participation and review parameters.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::EventType;
use sea_orm::ActiveValue;

use crate::{
    model::event::{
        CreateEventDto, CreateParticipationDto, CreateReviewDto, EventDto, ParticipationDto,
        ReviewDto, UpdateEventDto, UpdateParticipationDto, UpdateReviewDto,
    },
    server::{data::soft_delete::Changes, error::AppError, util::validate},
};

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub kind: EventType,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub meeting_point: Option<String>,
    pub location_id: i32,
    /// User id, resolved to a profile by the service.
    pub organizer_user_id: i32,
    pub team_id: i32,
    pub path_id: Option<i32>,
}

impl CreateEventParams {
    pub fn from_dto(dto: CreateEventDto) -> Result<Self, AppError> {
        validate::date_range(&dto.start_date, &dto.end_date)?;

        Ok(Self {
            kind: dto.kind.unwrap_or(EventType::Ride),
            name: validate::text("Name", dto.name, 3, 50)?,
            description: validate::optional_text("Description", dto.description, 1000)?,
            start_date: dto.start_date,
            end_date: dto.end_date,
            meeting_point: validate::optional_text("Meeting point", dto.meeting_point, 100)?,
            location_id: dto.location_id,
            organizer_user_id: dto.organizer_id,
            team_id: dto.team_id,
            path_id: dto.path_id,
        })
    }

    /// Builds the active model with the organizer's profile id.
    pub fn into_active_model(self, organizer_id: i32) -> entity::event::ActiveModel {
        entity::event::ActiveModel {
            kind: ActiveValue::Set(self.kind),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            meeting_point: ActiveValue::Set(self.meeting_point),
            location_id: ActiveValue::Set(self.location_id),
            organizer_id: ActiveValue::Set(organizer_id),
            team_id: ActiveValue::Set(self.team_id),
            path_id: ActiveValue::Set(self.path_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub kind: Option<EventType>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub meeting_point: Option<Option<String>>,
    pub location_id: Option<i32>,
    /// User id of the new organizer, as sent by the client.
    pub organizer_user_id: Option<i32>,
    /// Profile id of the new organizer, filled in by the service.
    pub organizer_id: Option<i32>,
    pub team_id: Option<i32>,
    pub path_id: Option<Option<i32>>,
}

impl UpdateEventParams {
    pub fn from_dto(dto: UpdateEventDto) -> Result<Self, AppError> {
        if let (Some(start), Some(end)) = (&dto.start_date, &dto.end_date) {
            validate::date_range(start, end)?;
        }

        Ok(Self {
            kind: dto.kind,
            name: dto
                .name
                .map(|v| validate::text("Name", v, 3, 50))
                .transpose()?,
            description: dto
                .description
                .map(|v| validate::optional_text("Description", v, 1000))
                .transpose()?,
            start_date: dto.start_date,
            end_date: dto.end_date,
            meeting_point: dto
                .meeting_point
                .map(|v| validate::optional_text("Meeting point", v, 100))
                .transpose()?,
            location_id: dto.location_id,
            organizer_user_id: dto.organizer_id,
            organizer_id: None,
            team_id: dto.team_id,
            path_id: dto.path_id,
        })
    }
}

impl Changes<entity::event::Entity> for UpdateEventParams {
    fn apply(self, model: &mut entity::event::ActiveModel) {
        if let Some(kind) = self.kind {
            model.kind = ActiveValue::Set(kind);
        }
        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = self.description {
            model.description = ActiveValue::Set(description);
        }
        if let Some(start_date) = self.start_date {
            model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = self.end_date {
            model.end_date = ActiveValue::Set(end_date);
        }
        if let Some(meeting_point) = self.meeting_point {
            model.meeting_point = ActiveValue::Set(meeting_point);
        }
        if let Some(location_id) = self.location_id {
            model.location_id = ActiveValue::Set(location_id);
        }
        if let Some(organizer_id) = self.organizer_id {
            model.organizer_id = ActiveValue::Set(organizer_id);
        }
        if let Some(team_id) = self.team_id {
            model.team_id = ActiveValue::Set(team_id);
        }
        if let Some(path_id) = self.path_id {
            model.path_id = ActiveValue::Set(path_id);
        }
    }
}

impl From<entity::event::Model> for EventDto {
    fn from(event: entity::event::Model) -> Self {
        Self {
            id: event.id,
            kind: event.kind,
            name: event.name,
            description: event.description,
            start_date: event.start_date,
            end_date: event.end_date,
            meeting_point: event.meeting_point,
            location_id: event.location_id,
            organizer_id: event.organizer_id,
            team_id: event.team_id,
            path_id: event.path_id,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateParticipationParams {
    pub attended: bool,
}

impl CreateParticipationParams {
    pub fn from_dto(dto: CreateParticipationDto) -> Self {
        Self {
            attended: dto.attended,
        }
    }

    pub fn into_active_model(
        self,
        member_id: i32,
        event_id: i32,
    ) -> entity::participation::ActiveModel {
        entity::participation::ActiveModel {
            attended: ActiveValue::Set(self.attended),
            member_id: ActiveValue::Set(member_id),
            event_id: ActiveValue::Set(event_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateParticipationParams {
    pub attended: Option<bool>,
}

impl UpdateParticipationParams {
    pub fn from_dto(dto: UpdateParticipationDto) -> Self {
        Self {
            attended: dto.attended,
        }
    }
}

impl Changes<entity::participation::Entity> for UpdateParticipationParams {
    fn apply(self, model: &mut entity::participation::ActiveModel) {
        if let Some(attended) = self.attended {
            model.attended = ActiveValue::Set(attended);
        }
    }
}

impl From<entity::participation::Model> for ParticipationDto {
    fn from(participation: entity::participation::Model) -> Self {
        Self {
            id: participation.id,
            attended: participation.attended,
            member_id: participation.member_id,
            event_id: participation.event_id,
            created_at: participation.created_at,
            updated_at: participation.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub score: i32,
    pub comment: Option<String>,
}

impl CreateReviewParams {
    pub fn from_dto(dto: CreateReviewDto) -> Result<Self, AppError> {
        Ok(Self {
            score: validate::range("Score", dto.score, 1, 5)?,
            comment: validate::optional_text("Comment", dto.comment, 500)?,
        })
    }

    pub fn into_active_model(self, author_id: i32, event_id: i32) -> entity::review::ActiveModel {
        entity::review::ActiveModel {
            score: ActiveValue::Set(self.score),
            comment: ActiveValue::Set(self.comment),
            author_id: ActiveValue::Set(author_id),
            event_id: ActiveValue::Set(event_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParams {
    pub score: Option<i32>,
    pub comment: Option<Option<String>>,
}

impl UpdateReviewParams {
    pub fn from_dto(dto: UpdateReviewDto) -> Result<Self, AppError> {
        Ok(Self {
            score: dto
                .score
                .map(|v| validate::range("Score", v, 1, 5))
                .transpose()?,
            comment: dto
                .comment
                .map(|v| validate::optional_text("Comment", v, 500))
                .transpose()?,
        })
    }
}

impl Changes<entity::review::Entity> for UpdateReviewParams {
    fn apply(self, model: &mut entity::review::ActiveModel) {
        if let Some(score) = self.score {
            model.score = ActiveValue::Set(score);
        }
        if let Some(comment) = self.comment {
            model.comment = ActiveValue::Set(comment);
        }
    }
}

impl From<entity::review::Model> for ReviewDto {
    fn from(review: entity::review::Model) -> Self {
        Self {
            id: review.id,
            score: review.score,
            comment: review.comment,
            author_id: review.author_id,
            event_id: review.event_id,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_score_must_be_between_one_and_five() {
        let review = |score| CreateReviewDto {
            score,
            comment: None,
        };

        assert!(CreateReviewParams::from_dto(review(0)).is_err());
        assert!(CreateReviewParams::from_dto(review(1)).is_ok());
        assert!(CreateReviewParams::from_dto(review(5)).is_ok());
        assert!(CreateReviewParams::from_dto(review(6)).is_err());
    }

    #[test]
    fn event_defaults_to_ride() {
        let start = test_utils::fixture::event::default_start_date();
        let params = CreateEventParams::from_dto(CreateEventDto {
            kind: None,
            name: "Sunday ride".to_string(),
            description: None,
            start_date: start,
            end_date: start,
            meeting_point: Some("  ".to_string()),
            location_id: 1,
            organizer_id: 1,
            team_id: 1,
            path_id: None,
        })
        .unwrap();

        assert_eq!(params.kind, EventType::Ride);
        assert_eq!(params.meeting_point, None);
    }
}
