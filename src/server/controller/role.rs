use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{DeleteParamsDto, ErrorDto, ListParamsDto, PaginatedDto},
        role::{CreateRoleDto, RoleDto, UpdateRoleDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission, ADMIN_ROLE},
        model::{
            pagination::ListQuery,
            role::{CreateRoleParams, UpdateRoleParams},
        },
        service::role::RoleService,
        state::AppState,
    },
};

/// Tag for grouping role endpoints in OpenAPI documentation
pub static ROLE_TAG: &str = "roles";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_roles, create_role))
        .routes(routes!(get_role, update_role, delete_role))
        .routes(routes!(get_role_users))
}

#[utoipa::path(
    get,
    path = "/roles",
    tag = ROLE_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of roles", body = PaginatedDto<RoleDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_roles(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let roles = RoleService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(roles.into_dto::<RoleDto>())))
}

/// Create a role.
///
/// # Access Control
/// - `admin` - Only administrators can manage roles
///
/// # Returns
/// - `201 Created` - The new role
/// - `400 Bad Request` - Invalid name or description
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in, or not an administrator
/// - `409 Conflict` - A role with this name exists
#[utoipa::path(
    post,
    path = "/roles",
    tag = ROLE_TAG,
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Role created", body = RoleDto),
        (status = 400, description = "Invalid role data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 409, description = "Role name already exists", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::AnyRole(&[ADMIN_ROLE])])
        .await?;

    let params = CreateRoleParams::from_dto(payload)?;
    let role = RoleService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(RoleDto::from(role))))
}

#[utoipa::path(
    get,
    path = "/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role id")),
    responses(
        (status = 200, description = "The role", body = RoleDto),
        (status = 404, description = "Role not found", body = ErrorDto)
    ),
)]
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let role = RoleService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(RoleDto::from(role))))
}

/// Partially update a role. Administrators only.
#[utoipa::path(
    put,
    path = "/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role id")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = RoleDto),
        (status = 400, description = "Invalid role data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 409, description = "Role name already exists", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::AnyRole(&[ADMIN_ROLE])])
        .await?;

    let params = UpdateRoleParams::from_dto(payload)?;
    let role = RoleService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(RoleDto::from(role))))
}

/// Delete a role. Administrators only.
///
/// A role still assigned to users cannot be hard deleted.
#[utoipa::path(
    delete,
    path = "/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 409, description = "Role still assigned to users", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::AnyRole(&[ADMIN_ROLE])])
        .await?;

    RoleService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/roles/{id}/users",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role id")),
    responses(
        (status = 200, description = "Users holding the role", body = Vec<UserDto>),
        (status = 404, description = "Role not found", body = ErrorDto)
    ),
)]
pub async fn get_role_users(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let users = RoleService::new(&state.db).users(id).await?;

    Ok((StatusCode::OK, Json(users)))
}
