use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent with the request.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The token is malformed, expired, signed with another key or issued for another purpose.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The token is valid but its subject no longer resolves to an active user.
    #[error("Token subject {0} does not resolve to an active user")]
    UnknownSubject(String),

    /// E-mail and password do not match a user.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// The account exists but has not been activated.
    #[error("User {0} is inactive")]
    InactiveUser(i32),

    /// The user's role is not among the roles allowed on the route.
    ///
    /// # Fields
    /// - User ID that was denied
    /// - Description of the denied action for logging
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UnknownSubject` → 401 with "Could not validate credentials"
/// - `InvalidCredentials` → 401 with "Incorrect email or password"
/// - `InactiveUser` → 403 with "Inactive user"
/// - `AccessDenied` → 403 with "User doesn't have the necessary role to access this route"
///
/// All errors are logged at debug level while the client receives a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UnknownSubject(_) => {
                (StatusCode::UNAUTHORIZED, "Could not validate credentials")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Incorrect email or password"),
            Self::InactiveUser(_) => (StatusCode::FORBIDDEN, "Inactive user"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "User doesn't have the necessary role to access this route",
            ),
        };

        let mut response = (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                axum::http::header::WWW_AUTHENTICATE,
                axum::http::HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}
