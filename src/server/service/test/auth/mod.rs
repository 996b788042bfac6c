use chrono::NaiveDate;
use entity::sea_orm_active_enums::{DocumentType, GenderType, RhType, UserStatus};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{auth::RegisterDto, user::CreateProfileDto},
    server::{
        error::{auth::AuthError, AppError},
        model::{role::MEMBER_ROLE, user::RegisterParams},
        service::{auth::AuthService, token::TokenKind},
        state::AppState,
        util::password::{hash_password, verify_password},
    },
};

mod confirm_email;
mod login;
mod password;
mod register;

const PASSWORD: &str = "Rodada#2024";

fn register_params(username: &str, email: &str, team_id: i32) -> RegisterParams {
    RegisterParams::from_dto(RegisterDto {
        username: username.to_string(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
        role_id: None,
        profile: CreateProfileDto {
            first_name: "Camila".to_string(),
            last_name: "Zapata".to_string(),
            nickname: None,
            telephone: Some("310 555 1234".to_string()),
            document_type: DocumentType::Cc,
            document_number: "1037654321".to_string(),
            rh: RhType::OPositive,
            birthdate: NaiveDate::from_ymd_opt(1992, 3, 8).unwrap(),
            gender: GenderType::Female,
            photo: None,
            team_id,
        },
    })
    .unwrap()
}

/// Seeds the default role and a team, returning the team id.
async fn seed(db: &DatabaseConnection) -> Result<i32, AppError> {
    factory::role::RoleFactory::new(db).name(MEMBER_ROLE).build().await?;
    let location = factory::create_location(db).await?;
    let team = factory::create_team(db, location.id).await?;

    Ok(team.id)
}

/// Creates an active account whose password is [`PASSWORD`].
async fn active_user(
    db: &DatabaseConnection,
    email: &str,
    status: UserStatus,
) -> Result<entity::user::Model, AppError> {
    let role = factory::create_role(db).await?;

    Ok(factory::user::UserFactory::new(db, role.id)
        .email(email)
        .password_hash(hash_password(PASSWORD)?)
        .status(status)
        .build()
        .await?)
}
