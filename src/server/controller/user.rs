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
        motorcycle::MotorcycleDto,
        user::{BirthdateParamsDto, MembershipCardDto, UpdateUserDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission, ADMIN_ROLE},
        model::{pagination::ListQuery, user::UpdateUserParams},
        service::{
            member::MemberService,
            motorcycle::MotorcycleService,
            user::{BirthdateQuery, UserService},
        },
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_users))
        .routes(routes!(get_current_user))
        .routes(routes!(get_birthdays_today))
        .routes(routes!(get_users_by_birthdate))
        .routes(routes!(get_user, update_user, delete_user))
        .routes(routes!(get_user_motorcycles))
        .routes(routes!(get_membership_card))
}

/// List member accounts.
///
/// Accounts are created through `/register`, so there is no `POST /users`. Filter and
/// sort clauses apply to account columns; the password hash is not reachable.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of users", body = PaginatedDto<UserDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto::<UserDto>())))
}

/// Get the account the bearer token was issued for.
#[utoipa::path(
    get,
    path = "/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The logged in user", body = UserDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Inactive account", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state, &headers).require(&[]).await?;

    let user = MemberService::new(&state.db).with_profile(current.user).await?;

    Ok((StatusCode::OK, Json(user)))
}

#[utoipa::path(
    get,
    path = "/users/birthdates/today",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Members whose birthday is today", body = Vec<UserDto>)
    ),
)]
pub async fn get_birthdays_today(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).birthdays_today().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Find members by birthdate.
///
/// Pass either `date`, or both `start_date` and `end_date` for an inclusive range.
#[utoipa::path(
    get,
    path = "/users/birthdates",
    tag = USER_TAG,
    params(BirthdateParamsDto),
    responses(
        (status = 200, description = "Members born on the date or in the range", body = Vec<UserDto>),
        (status = 400, description = "Neither a date nor a complete range was given", body = ErrorDto)
    ),
)]
pub async fn get_users_by_birthdate(
    State(state): State<AppState>,
    Query(params): Query<BirthdateParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let query = BirthdateQuery::from_params(params.date, params.start_date, params.end_date)?;
    let users = UserService::new(&state.db).by_birthdate(query).await?;

    Ok((StatusCode::OK, Json(users)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user with profile", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Update an account and its profile.
///
/// # Access Control
/// - The account owner may update their own profile
/// - `admin` - May update any account, and is the only role allowed to change
///   `role_id` or `status`
///
/// # Returns
/// - `200 OK` - Account with its profile after the update
/// - `400 Bad Request` - Invalid profile data
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in, or not allowed
/// - `404 Not Found` - Unknown user, role or team
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the account owner or an administrator", body = ErrorDto),
        (status = 404, description = "User, role or team not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state, &headers)
        .require(&[Permission::SelfOrRole(id, &[ADMIN_ROLE])])
        .await?;

    let params = UpdateUserParams::from_dto(payload)?;
    if params.changes_account() && !current.is_admin() {
        return Err(AuthError::AccessDenied(
            current.user.id,
            format!("attempted to change the role or status of user #{}", id),
        )
        .into());
    }

    let user = UserService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Delete an account. A soft delete marks the profile deleted as well.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id"), DeleteParamsDto),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the account owner or an administrator", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::SelfOrRole(id, &[ADMIN_ROLE])])
        .await?;

    UserService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/users/{id}/motorcycles",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Motorcycles owned by the member", body = Vec<MotorcycleDto>),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_motorcycles(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let motorcycles = MotorcycleService::new(&state.db).by_user(id).await?;
    let motorcycles_dto: Vec<MotorcycleDto> =
        motorcycles.into_iter().map(MotorcycleDto::from).collect();

    Ok((StatusCode::OK, Json(motorcycles_dto)))
}

/// Get the data printed on a member's club card.
///
/// # Access Control
/// - The card owner, or an `admin`
#[utoipa::path(
    get,
    path = "/users/{id}/membership-card",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Membership card data", body = MembershipCardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the card owner or an administrator", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_membership_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::SelfOrRole(id, &[ADMIN_ROLE])])
        .await?;

    let card = UserService::new(&state.db)
        .membership_card(id, &state.config.app_name)
        .await?;

    Ok((StatusCode::OK, Json(card)))
}
