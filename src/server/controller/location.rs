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
        event::EventDto,
        location::{CreateLocationDto, LocationDto, UpdateLocationDto},
        team::TeamDto,
    },
    server::{
        error::AppError,
        model::{
            location::{CreateLocationParams, UpdateLocationParams},
            pagination::ListQuery,
        },
        service::location::LocationService,
        state::AppState,
    },
};

/// Tag for grouping location endpoints in OpenAPI documentation
pub static LOCATION_TAG: &str = "locations";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_locations, create_location))
        .routes(routes!(get_location, update_location, delete_location))
        .routes(routes!(get_location_department))
        .routes(routes!(get_location_cities))
        .routes(routes!(get_location_teams))
        .routes(routes!(get_location_events))
}

#[utoipa::path(
    get,
    path = "/locations",
    tag = LOCATION_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of locations", body = PaginatedDto<LocationDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_locations(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let locations = LocationService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(locations.into_dto::<LocationDto>())))
}

/// Create a city or a department.
///
/// Cities may reference the department they belong to through `department_id`.
#[utoipa::path(
    post,
    path = "/locations",
    tag = LOCATION_TAG,
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto)
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    Json(payload): Json<CreateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateLocationParams::from_dto(payload)?;
    let location = LocationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(LocationDto::from(location))))
}

#[utoipa::path(
    get,
    path = "/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location id")),
    responses(
        (status = 200, description = "The location", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto)
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let location = LocationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(LocationDto::from(location))))
}

/// Partially update a location.
///
/// Sending `"department_id": null` detaches a city from its department.
#[utoipa::path(
    put,
    path = "/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location id")),
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Location updated", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto)
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateLocationParams::from_dto(payload)?;
    let location = LocationService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(LocationDto::from(location))))
}

#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 409, description = "Location is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    LocationService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the department a city belongs to.
///
/// # Returns
/// - `200 OK` - The department
/// - `404 Not Found` - Unknown location, or a city without department
/// - `409 Conflict` - The location is itself a department
#[utoipa::path(
    get,
    path = "/locations/{id}/department",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location id")),
    responses(
        (status = 200, description = "Department of the city", body = LocationDto),
        (status = 404, description = "Location not found, or it has no department", body = ErrorDto)
    ),
)]
pub async fn get_location_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let department = LocationService::new(&state.db).department(id).await?;

    Ok((StatusCode::OK, Json(LocationDto::from(department))))
}

#[utoipa::path(
    get,
    path = "/locations/{id}/cities",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location id")),
    responses(
        (status = 200, description = "Cities of the department", body = Vec<LocationDto>),
        (status = 404, description = "Location not found", body = ErrorDto)
    ),
)]
pub async fn get_location_cities(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cities = LocationService::new(&state.db).cities(id).await?;
    let cities_dto: Vec<LocationDto> = cities.into_iter().map(LocationDto::from).collect();

    Ok((StatusCode::OK, Json(cities_dto)))
}

#[utoipa::path(
    get,
    path = "/locations/{id}/teams",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location id")),
    responses(
        (status = 200, description = "Teams based in the location", body = Vec<TeamDto>),
        (status = 404, description = "Location not found", body = ErrorDto)
    ),
)]
pub async fn get_location_teams(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teams = LocationService::new(&state.db).teams(id).await?;
    let teams_dto: Vec<TeamDto> = teams.into_iter().map(TeamDto::from).collect();

    Ok((StatusCode::OK, Json(teams_dto)))
}

#[utoipa::path(
    get,
    path = "/locations/{id}/events",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location id")),
    responses(
        (status = 200, description = "Events held in the location", body = Vec<EventDto>),
        (status = 404, description = "Location not found", body = ErrorDto)
    ),
)]
pub async fn get_location_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = LocationService::new(&state.db).events(id).await?;
    let events_dto: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok((StatusCode::OK, Json(events_dto)))
}
