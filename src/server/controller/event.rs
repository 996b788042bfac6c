use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{DeleteParamsDto, ErrorDto, ListParamsDto, PaginatedDto},
        event::{
            AttendedParamsDto, CreateEventDto, CreateParticipationDto, CreateReviewDto, EventDto,
            ParticipationDto, ReviewDto, ScoreParamsDto, UpdateEventDto, UpdateParticipationDto,
            UpdateReviewDto,
        },
        location::LocationDto,
        path::PathDto,
        team::TeamDto,
        user::UserDto,
    },
    server::{
        error::AppError,
        model::{
            event::{
                CreateEventParams, CreateParticipationParams, CreateReviewParams,
                UpdateEventParams, UpdateParticipationParams, UpdateReviewParams,
            },
            pagination::ListQuery,
        },
        service::event::{EventService, ParticipationService, ReviewService},
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "events";

/// Tag for grouping participation and review endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_events, create_event))
        .routes(routes!(get_event, update_event, delete_event))
        .routes(routes!(get_event_location))
        .routes(routes!(get_event_organizer))
        .routes(routes!(get_event_team))
        .routes(routes!(get_event_path))
        .routes(routes!(
            create_participation,
            get_participation,
            update_participation,
            delete_participation
        ))
        .routes(routes!(get_event_participations))
        .routes(routes!(get_user_participations))
        .routes(routes!(create_review, get_review, update_review, delete_review))
        .routes(routes!(get_event_reviews))
        .routes(routes!(get_user_reviews))
}

#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of events", body = PaginatedDto<EventDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(events.into_dto::<EventDto>())))
}

/// Create an event.
///
/// `organizer_id` is the user id of the organizer, who must be a member of the event's
/// team.
///
/// # Returns
/// - `201 Created` - The new event
/// - `400 Bad Request` - Invalid data, dates out of order, or organizer outside the team
/// - `404 Not Found` - Unknown location, organizer, team or path
#[utoipa::path(
    post,
    path = "/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Location, organizer, team or path not found", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateEventParams::from_dto(payload)?;
    let event = EventService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(EventDto::from(event))))
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(EventDto::from(event))))
}

/// Partially update an event.
///
/// Changing the organizer or the team checks the membership again.
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateEventParams::from_dto(payload)?;
    let event = EventService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(EventDto::from(event))))
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/events/{id}/location",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Location of the event", body = LocationDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let location = EventService::new(&state.db).location(id).await?;

    Ok((StatusCode::OK, Json(LocationDto::from(location))))
}

#[utoipa::path(
    get,
    path = "/events/{id}/organizer",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Organizer with profile", body = UserDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event_organizer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let organizer = EventService::new(&state.db).organizer(id).await?;

    Ok((StatusCode::OK, Json(organizer)))
}

#[utoipa::path(
    get,
    path = "/events/{id}/team",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Team organizing the event", body = TeamDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = EventService::new(&state.db).team(id).await?;

    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}

#[utoipa::path(
    get,
    path = "/events/{id}/path",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Ride path of the event", body = PathDto),
        (status = 404, description = "Event not found, or it has no path", body = ErrorDto)
    ),
)]
pub async fn get_event_path(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let path = EventService::new(&state.db).path(id).await?;

    Ok((StatusCode::OK, Json(PathDto::from(path))))
}

/// Register a member for an event.
///
/// # Returns
/// - `201 Created` - The participation
/// - `400 Bad Request` - The member already takes part in the event
/// - `404 Not Found` - Unknown event or user
#[utoipa::path(
    post,
    path = "/events/{id}/users/{user_id}/participations",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "User id of the participant")
    ),
    request_body = CreateParticipationDto,
    responses(
        (status = 201, description = "Participation created", body = ParticipationDto),
        (status = 400, description = "Already participating", body = ErrorDto),
        (status = 404, description = "Event or user not found", body = ErrorDto)
    ),
)]
pub async fn create_participation(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<CreateParticipationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateParticipationParams::from_dto(payload);
    let participation = ParticipationService::new(&state.db)
        .create(id, user_id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(ParticipationDto::from(participation))))
}

#[utoipa::path(
    get,
    path = "/events/{id}/users/{user_id}/participations",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "User id of the participant")
    ),
    responses(
        (status = 200, description = "The participation", body = ParticipationDto),
        (status = 404, description = "Event, user or participation not found", body = ErrorDto)
    ),
)]
pub async fn get_participation(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let participation = ParticipationService::new(&state.db)
        .get(id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(ParticipationDto::from(participation))))
}

/// Mark whether the member attended the event.
#[utoipa::path(
    put,
    path = "/events/{id}/users/{user_id}/participations",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "User id of the participant")
    ),
    request_body = UpdateParticipationDto,
    responses(
        (status = 200, description = "Participation updated", body = ParticipationDto),
        (status = 404, description = "Event, user or participation not found", body = ErrorDto)
    ),
)]
pub async fn update_participation(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateParticipationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateParticipationParams::from_dto(payload);
    let participation = ParticipationService::new(&state.db)
        .update(id, user_id, params)
        .await?;

    Ok((StatusCode::OK, Json(ParticipationDto::from(participation))))
}

#[utoipa::path(
    delete,
    path = "/events/{id}/users/{user_id}/participations",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "User id of the participant"),
        DeleteParamsDto
    ),
    responses(
        (status = 204, description = "Participation deleted"),
        (status = 404, description = "Event, user or participation not found", body = ErrorDto)
    ),
)]
pub async fn delete_participation(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    ParticipationService::new(&state.db)
        .delete(id, user_id, params.hard)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/events/{id}/participations",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Event id"), AttendedParamsDto),
    responses(
        (status = 200, description = "Participations in the event", body = Vec<ParticipationDto>),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event_participations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<AttendedParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let participations = ParticipationService::new(&state.db)
        .by_event(id, params.attended)
        .await?;
    let participations_dto: Vec<ParticipationDto> = participations
        .into_iter()
        .map(ParticipationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(participations_dto)))
}

#[utoipa::path(
    get,
    path = "/users/{id}/participations",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "User id"), AttendedParamsDto),
    responses(
        (status = 200, description = "Participations of the member", body = Vec<ParticipationDto>),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_participations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<AttendedParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let participations = ParticipationService::new(&state.db)
        .by_user(id, params.attended)
        .await?;
    let participations_dto: Vec<ParticipationDto> = participations
        .into_iter()
        .map(ParticipationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(participations_dto)))
}

/// Review an event the member attended.
///
/// # Returns
/// - `201 Created` - The review
/// - `400 Bad Request` - Invalid score, member did not attend, or already reviewed
/// - `404 Not Found` - Unknown event or user
#[utoipa::path(
    post,
    path = "/events/{id}/users/{user_id}/reviews",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "User id of the author")
    ),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Invalid review, not attended or already reviewed", body = ErrorDto),
        (status = 404, description = "Event or user not found", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateReviewParams::from_dto(payload)?;
    let review = ReviewService::new(&state.db)
        .create(id, user_id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(ReviewDto::from(review))))
}

#[utoipa::path(
    get,
    path = "/events/{id}/users/{user_id}/reviews",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "User id of the author")
    ),
    responses(
        (status = 200, description = "The review", body = ReviewDto),
        (status = 404, description = "Event, user or review not found", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let review = ReviewService::new(&state.db).get(id, user_id).await?;

    Ok((StatusCode::OK, Json(ReviewDto::from(review))))
}

#[utoipa::path(
    put,
    path = "/events/{id}/users/{user_id}/reviews",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "User id of the author")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ReviewDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 404, description = "Event, user or review not found", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateReviewParams::from_dto(payload)?;
    let review = ReviewService::new(&state.db)
        .update(id, user_id, params)
        .await?;

    Ok((StatusCode::OK, Json(ReviewDto::from(review))))
}

#[utoipa::path(
    delete,
    path = "/events/{id}/users/{user_id}/reviews",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "User id of the author"),
        DeleteParamsDto
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Event, user or review not found", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    ReviewService::new(&state.db)
        .delete(id, user_id, params.hard)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/events/{id}/reviews",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Event id"), ScoreParamsDto),
    responses(
        (status = 200, description = "Reviews of the event", body = Vec<ReviewDto>),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<ScoreParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .by_event(id, params.score)
        .await?;
    let reviews_dto: Vec<ReviewDto> = reviews.into_iter().map(ReviewDto::from).collect();

    Ok((StatusCode::OK, Json(reviews_dto)))
}

#[utoipa::path(
    get,
    path = "/users/{id}/reviews",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "User id"), ScoreParamsDto),
    responses(
        (status = 200, description = "Reviews written by the member", body = Vec<ReviewDto>),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<ScoreParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .by_user(id, params.score)
        .await?;
    let reviews_dto: Vec<ReviewDto> = reviews.into_iter().map(ReviewDto::from).collect();

    Ok((StatusCode::OK, Json(reviews_dto)))
}
