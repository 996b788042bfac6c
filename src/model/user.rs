use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{DocumentType, GenderType, RhType, UserStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub telephone: Option<String>,
    #[schema(value_type = String, example = "Cédula de Ciudadanía")]
    pub document_type: DocumentType,
    pub document_number: String,
    #[schema(value_type = String, example = "O+")]
    pub rh: RhType,
    pub birthdate: NaiveDate,
    #[schema(value_type = String, example = "femenino")]
    pub gender: GenderType,
    pub photo: Option<String>,
    pub user_id: i32,
    pub team_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[schema(value_type = String, example = "activo")]
    pub status: UserStatus,
    pub role_id: i32,
    /// `None` only for accounts whose profile was removed
    pub profile: Option<ProfileDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProfileDto {
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub telephone: Option<String>,
    #[schema(value_type = String, example = "Cédula de Ciudadanía")]
    pub document_type: DocumentType,
    pub document_number: String,
    #[schema(value_type = String, example = "O+")]
    pub rh: RhType,
    pub birthdate: NaiveDate,
    #[schema(value_type = String, example = "femenino")]
    pub gender: GenderType,
    pub photo: Option<String>,
    pub team_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<String>)]
    pub nickname: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<String>)]
    pub telephone: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<String>)]
    pub photo: Option<Option<String>>,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub role_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub status: Option<UserStatus>,
    pub profile: Option<UpdateProfileDto>,
}

/// Data printed on a member's club card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MembershipCardDto {
    pub club_name: String,
    pub card_number: String,
    pub member_name: String,
    pub nickname: Option<String>,
    /// Short document code and number, e.g. `CC 1020304050`
    pub document: String,
    pub rh: String,
    pub role: String,
    pub team: String,
    pub location: String,
    pub telephone: Option<String>,
    pub member_since: NaiveDate,
    /// Last day of the year the card was issued
    pub valid_until: NaiveDate,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BirthdateParamsDto {
    /// Exact birthdate to look for
    pub date: Option<NaiveDate>,
    /// First birthdate of an inclusive range
    pub start_date: Option<NaiveDate>,
    /// Last birthdate of an inclusive range
    pub end_date: Option<NaiveDate>,
}
