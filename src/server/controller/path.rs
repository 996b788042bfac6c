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
        path::{CreatePathDto, PathDto, UpdatePathDto},
    },
    server::{
        error::AppError,
        model::{
            pagination::ListQuery,
            path::{CreatePathParams, UpdatePathParams},
        },
        service::path::PathService,
        state::AppState,
    },
};

/// Tag for grouping ride path endpoints in OpenAPI documentation
pub static PATH_TAG: &str = "paths";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_paths, create_path))
        .routes(routes!(get_path, update_path, delete_path))
        .routes(routes!(get_path_events))
}

#[utoipa::path(
    get,
    path = "/paths",
    tag = PATH_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of paths", body = PaginatedDto<PathDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_paths(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let paths = PathService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(paths.into_dto::<PathDto>())))
}

#[utoipa::path(
    post,
    path = "/paths",
    tag = PATH_TAG,
    request_body = CreatePathDto,
    responses(
        (status = 201, description = "Path created", body = PathDto),
        (status = 400, description = "Invalid path data", body = ErrorDto),
        (status = 409, description = "Path name already exists", body = ErrorDto)
    ),
)]
pub async fn create_path(
    State(state): State<AppState>,
    Json(payload): Json<CreatePathDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePathParams::from_dto(payload)?;
    let path = PathService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(PathDto::from(path))))
}

#[utoipa::path(
    get,
    path = "/paths/{id}",
    tag = PATH_TAG,
    params(("id" = i32, Path, description = "Path id")),
    responses(
        (status = 200, description = "The path", body = PathDto),
        (status = 404, description = "Path not found", body = ErrorDto)
    ),
)]
pub async fn get_path(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let path = PathService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(PathDto::from(path))))
}

#[utoipa::path(
    put,
    path = "/paths/{id}",
    tag = PATH_TAG,
    params(("id" = i32, Path, description = "Path id")),
    request_body = UpdatePathDto,
    responses(
        (status = 200, description = "Path updated", body = PathDto),
        (status = 400, description = "Invalid path data", body = ErrorDto),
        (status = 404, description = "Path not found", body = ErrorDto),
        (status = 409, description = "Path name already exists", body = ErrorDto)
    ),
)]
pub async fn update_path(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePathDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdatePathParams::from_dto(payload)?;
    let path = PathService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(PathDto::from(path))))
}

#[utoipa::path(
    delete,
    path = "/paths/{id}",
    tag = PATH_TAG,
    params(("id" = i32, Path, description = "Path id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Path deleted"),
        (status = 404, description = "Path not found", body = ErrorDto),
        (status = 409, description = "Path is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_path(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    PathService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/paths/{id}/events",
    tag = PATH_TAG,
    params(("id" = i32, Path, description = "Path id")),
    responses(
        (status = 200, description = "Events riding the path", body = Vec<EventDto>),
        (status = 404, description = "Path not found", body = ErrorDto)
    ),
)]
pub async fn get_path_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = PathService::new(&state.db).events(id).await?;
    let events_dto: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok((StatusCode::OK, Json(events_dto)))
}
