use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::CreateProfileDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Defaults to the `member` role
    pub role_id: Option<i32>,
    pub profile: CreateProfileDto,
}

/// Form body of `POST /token`. `username` carries the e-mail address.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginFormDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenDto {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordResetRequestDto {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
