use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        auth::{
            ChangePasswordDto, LoginFormDto, MessageDto, PasswordResetRequestDto,
            RefreshTokenDto, RegisterDto, ResetPasswordDto, TokenDto,
        },
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::RegisterParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(login))
        .routes(routes!(refresh_token))
        .routes(routes!(register))
        .routes(routes!(confirm_email))
        .routes(routes!(change_password))
        .routes(routes!(request_password_reset))
        .routes(routes!(reset_password))
}

fn message(text: &str) -> Json<MessageDto> {
    Json(MessageDto {
        message: text.to_string(),
    })
}

/// Log in with e-mail and password.
///
/// Takes an OAuth2 password form where `username` carries the e-mail address.
///
/// # Returns
/// - `200 OK` - Access and refresh tokens
/// - `401 Unauthorized` - Unknown e-mail or wrong password
/// - `403 Forbidden` - The account has not been confirmed
#[utoipa::path(
    post,
    path = "/token",
    tag = AUTH_TAG,
    request_body(content = LoginFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token pair", body = TokenDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 403, description = "Inactive user", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state)
        .login(&form.username, &form.password)
        .await?;

    Ok((StatusCode::OK, Json(tokens)))
}

#[utoipa::path(
    post,
    path = "/refresh-token",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "New token pair", body = TokenDto),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorDto)
    ),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state)
        .refresh(&payload.refresh_token)
        .await?;

    Ok((StatusCode::OK, Json(tokens)))
}

/// Register a new member.
///
/// The account starts inactive and a confirmation link is e-mailed to the given
/// address. The profile is created together with the account.
///
/// # Returns
/// - `201 Created` - The new account with its profile
/// - `400 Bad Request` - Invalid account or profile data
/// - `404 Not Found` - Unknown role or team
/// - `409 Conflict` - E-mail or username already registered
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 404, description = "Role or team not found", body = ErrorDto),
        (status = 409, description = "E-mail or username already registered", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;
    let user = AuthService::new(&state).register(params).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/confirm-email/{token}",
    tag = AUTH_TAG,
    params(("token" = String, Path, description = "Confirmation token from the e-mail")),
    responses(
        (status = 200, description = "Account activated", body = MessageDto),
        (status = 401, description = "Invalid or expired token", body = ErrorDto),
        (status = 409, description = "Account already active", body = ErrorDto)
    ),
)]
pub async fn confirm_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state).confirm_email(&token).await?;

    Ok((StatusCode::OK, message("Account activation successful!")))
}

#[utoipa::path(
    post,
    path = "/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = UserDto),
        (status = 400, description = "Wrong old password, unchanged or weak new password", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state, &headers).require(&[]).await?;

    let user = AuthService::new(&state)
        .change_password(&current.user, &payload.old_password, &payload.new_password)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Send a password reset link to an existing account.
#[utoipa::path(
    post,
    path = "/request-password-reset",
    tag = AUTH_TAG,
    request_body = PasswordResetRequestDto,
    responses(
        (status = 200, description = "Reset link sent", body = MessageDto),
        (status = 404, description = "No account with this e-mail", body = ErrorDto)
    ),
)]
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(payload): Json<PasswordResetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state)
        .request_password_reset(&payload.email)
        .await?;

    Ok((StatusCode::OK, message("Password reset link sent!")))
}

#[utoipa::path(
    post,
    path = "/reset-password/{token}",
    tag = AUTH_TAG,
    params(("token" = String, Path, description = "Reset token from the e-mail")),
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = MessageDto),
        (status = 400, description = "Weak new password", body = ErrorDto),
        (status = 401, description = "Invalid or expired token", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state)
        .reset_password(&token, &payload.new_password)
        .await?;

    Ok((StatusCode::OK, message("Password reset successful!")))
}
