//! User, profile and registration parameters.
//!
//! A user is the login account; the profile holds the member data printed on the
//! club card. Registration creates both in one transaction.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{DocumentType, GenderType, RhType, UserStatus};
use sea_orm::ActiveValue;

use crate::{
    model::{
        auth::RegisterDto,
        user::{CreateProfileDto, ProfileDto, UpdateProfileDto, UpdateUserDto, UserDto},
    },
    server::{data::soft_delete::Changes, error::AppError, util::validate},
};

/// Validated registration request. The password is still in plain text.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role_id: Option<i32>,
    pub profile: CreateProfileParams,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        Ok(Self {
            username: validate::username(dto.username)?,
            email: validate::email(&dto.email)?,
            password: validate::password(&dto.password)?,
            role_id: dto.role_id,
            profile: CreateProfileParams::from_dto(dto.profile)?,
        })
    }

    /// Builds the inactive account row; activation happens through e-mail confirmation.
    pub fn user_active_model(
        &self,
        password_hash: String,
        role_id: i32,
    ) -> entity::user::ActiveModel {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username.clone()),
            email: ActiveValue::Set(self.email.clone()),
            password: ActiveValue::Set(password_hash),
            status: ActiveValue::Set(UserStatus::Inactive),
            role_id: ActiveValue::Set(role_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProfileParams {
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub telephone: Option<String>,
    pub document_type: DocumentType,
    pub document_number: String,
    pub rh: RhType,
    pub birthdate: NaiveDate,
    pub gender: GenderType,
    pub photo: Option<String>,
    pub team_id: i32,
}

impl CreateProfileParams {
    pub fn from_dto(dto: CreateProfileDto) -> Result<Self, AppError> {
        let today = Utc::now().date_naive();

        Ok(Self {
            first_name: validate::text("First name", dto.first_name, 3, 25)?,
            last_name: validate::text("Last name", dto.last_name, 3, 25)?,
            nickname: validate::optional_text("Nickname", dto.nickname, 25)?,
            telephone: optional_telephone(dto.telephone)?,
            document_type: dto.document_type,
            document_number: validate::text("Document number", dto.document_number, 5, 20)?,
            rh: dto.rh,
            birthdate: validate::birthdate(dto.birthdate, today)?,
            gender: dto.gender,
            photo: validate::optional_text("Photo", dto.photo, 255)?,
            team_id: dto.team_id,
        })
    }

    pub fn into_active_model(self, user_id: i32) -> entity::profile::ActiveModel {
        entity::profile::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            nickname: ActiveValue::Set(self.nickname),
            telephone: ActiveValue::Set(self.telephone),
            document_type: ActiveValue::Set(self.document_type),
            document_number: ActiveValue::Set(self.document_number),
            rh: ActiveValue::Set(self.rh),
            birthdate: ActiveValue::Set(self.birthdate),
            gender: ActiveValue::Set(self.gender),
            photo: ActiveValue::Set(self.photo),
            user_id: ActiveValue::Set(user_id),
            team_id: ActiveValue::Set(self.team_id),
            ..Default::default()
        }
    }
}

fn optional_telephone(value: Option<String>) -> Result<Option<String>, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| validate::telephone(&v))
        .transpose()
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<Option<String>>,
    pub telephone: Option<Option<String>>,
    pub photo: Option<Option<String>>,
    pub team_id: Option<i32>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, AppError> {
        Ok(Self {
            first_name: dto
                .first_name
                .map(|v| validate::text("First name", v, 3, 25))
                .transpose()?,
            last_name: dto
                .last_name
                .map(|v| validate::text("Last name", v, 3, 25))
                .transpose()?,
            nickname: dto
                .nickname
                .map(|v| validate::optional_text("Nickname", v, 25))
                .transpose()?,
            telephone: dto.telephone.map(optional_telephone).transpose()?,
            photo: dto
                .photo
                .map(|v| validate::optional_text("Photo", v, 255))
                .transpose()?,
            team_id: dto.team_id,
        })
    }
}

impl Changes<entity::profile::Entity> for UpdateProfileParams {
    fn apply(self, model: &mut entity::profile::ActiveModel) {
        if let Some(first_name) = self.first_name {
            model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = self.last_name {
            model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(nickname) = self.nickname {
            model.nickname = ActiveValue::Set(nickname);
        }
        if let Some(telephone) = self.telephone {
            model.telephone = ActiveValue::Set(telephone);
        }
        if let Some(photo) = self.photo {
            model.photo = ActiveValue::Set(photo);
        }
        if let Some(team_id) = self.team_id {
            model.team_id = ActiveValue::Set(team_id);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub role_id: Option<i32>,
    pub status: Option<UserStatus>,
    pub profile: Option<UpdateProfileParams>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            role_id: dto.role_id,
            status: dto.status,
            profile: dto.profile.map(UpdateProfileParams::from_dto).transpose()?,
        })
    }

    /// Whether the update touches fields only an admin may change.
    pub fn changes_account(&self) -> bool {
        self.role_id.is_some() || self.status.is_some()
    }
}

/// Account-level changes, applied separately from the profile.
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub role_id: Option<i32>,
    pub status: Option<UserStatus>,
    pub password: Option<String>,
}

impl AccountChanges {
    pub fn activate() -> Self {
        Self {
            status: Some(UserStatus::Active),
            ..Default::default()
        }
    }

    pub fn password(password_hash: String) -> Self {
        Self {
            password: Some(password_hash),
            ..Default::default()
        }
    }
}

impl Changes<entity::user::Entity> for AccountChanges {
    fn apply(self, model: &mut entity::user::ActiveModel) {
        if let Some(role_id) = self.role_id {
            model.role_id = ActiveValue::Set(role_id);
        }
        if let Some(status) = self.status {
            model.status = ActiveValue::Set(status);
        }
        if let Some(password) = self.password {
            model.password = ActiveValue::Set(password);
        }
    }
}

impl From<entity::profile::Model> for ProfileDto {
    fn from(profile: entity::profile::Model) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            nickname: profile.nickname,
            telephone: profile.telephone,
            document_type: profile.document_type,
            document_number: profile.document_number,
            rh: profile.rh,
            birthdate: profile.birthdate,
            gender: profile.gender,
            photo: profile.photo,
            user_id: profile.user_id,
            team_id: profile.team_id,
        }
    }
}

impl UserDto {
    /// Combines an account with its member profile.
    pub fn from_parts(user: entity::user::Model, profile: Option<entity::profile::Model>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            status: user.status,
            role_id: user.role_id,
            profile: profile.map(ProfileDto::from),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_dto() -> CreateProfileDto {
        CreateProfileDto {
            first_name: " Ana ".to_string(),
            last_name: "Restrepo".to_string(),
            nickname: Some("".to_string()),
            telephone: Some("300 123 4567".to_string()),
            document_type: DocumentType::Cc,
            document_number: "1020304050".to_string(),
            rh: RhType::OPositive,
            birthdate: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            gender: GenderType::Female,
            photo: None,
            team_id: 1,
        }
    }

    #[test]
    fn normalizes_profile_fields() {
        let params = CreateProfileParams::from_dto(profile_dto()).unwrap();

        assert_eq!(params.first_name, "Ana");
        assert_eq!(params.nickname, None);
        assert_eq!(params.telephone.as_deref(), Some("3001234567"));
    }

    #[test]
    fn rejects_weak_password_on_register() {
        let dto = RegisterDto {
            username: "ana_r".to_string(),
            email: "Ana@Example.com".to_string(),
            password: "password".to_string(),
            role_id: None,
            profile: profile_dto(),
        };

        assert!(RegisterParams::from_dto(dto).is_err());
    }

    #[test]
    fn lowercases_register_email() {
        let dto = RegisterDto {
            username: "ana_r".to_string(),
            email: "Ana@Example.com".to_string(),
            password: "Str0ng!Pass".to_string(),
            role_id: None,
            profile: profile_dto(),
        };

        let params = RegisterParams::from_dto(dto).unwrap();
        assert_eq!(params.email, "ana@example.com");
    }

    #[test]
    fn role_and_status_changes_are_account_changes() {
        let params = UpdateUserParams::from_dto(UpdateUserDto {
            status: Some(UserStatus::Active),
            ..Default::default()
        })
        .unwrap();

        assert!(params.changes_account());
        assert!(!UpdateUserParams::default().changes_account());
    }
}
