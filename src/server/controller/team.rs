use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        agreement::AgreementDto,
        api::{DeleteParamsDto, ErrorDto, ListParamsDto, PaginatedDto},
        event::EventDto,
        location::LocationDto,
        team::{CreateTeamDto, TeamDto, UpdateTeamDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        model::{
            pagination::ListQuery,
            team::{CreateTeamParams, UpdateTeamParams},
        },
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "teams";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_teams, create_team))
        .routes(routes!(get_team, update_team, delete_team))
        .routes(routes!(get_team_location))
        .routes(routes!(get_team_members))
        .routes(routes!(get_team_events))
        .routes(routes!(get_team_agreements))
}

#[utoipa::path(
    get,
    path = "/teams",
    tag = TEAM_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of teams", body = PaginatedDto<TeamDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(teams.into_dto::<TeamDto>())))
}

#[utoipa::path(
    post,
    path = "/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 409, description = "Team name already exists", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTeamParams::from_dto(payload)?;
    let team = TeamService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(TeamDto::from(team))))
}

#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "The team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}

#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team name already exists", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateTeamParams::from_dto(payload)?;
    let team = TeamService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}

#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    TeamService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/teams/{id}/location",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Location of the team", body = LocationDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let location = TeamService::new(&state.db).location(id).await?;

    Ok((StatusCode::OK, Json(LocationDto::from(location))))
}

/// List the members of a team.
///
/// Each entry is the member's account with the profile embedded.
#[utoipa::path(
    get,
    path = "/teams/{id}/members",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Members of the team with their profiles", body = Vec<UserDto>),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team_members(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let members = TeamService::new(&state.db).members(id).await?;

    Ok((StatusCode::OK, Json(members)))
}

#[utoipa::path(
    get,
    path = "/teams/{id}/events",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Events organized by the team", body = Vec<EventDto>),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = TeamService::new(&state.db).events(id).await?;
    let events_dto: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok((StatusCode::OK, Json(events_dto)))
}

#[utoipa::path(
    get,
    path = "/teams/{id}/agreements",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Agreements the team takes part in", body = Vec<AgreementDto>),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team_agreements(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let agreements = TeamService::new(&state.db).agreements(id).await?;
    let agreements_dto: Vec<AgreementDto> = agreements.into_iter().map(AgreementDto::from).collect();

    Ok((StatusCode::OK, Json(agreements_dto)))
}
