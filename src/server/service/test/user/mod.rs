use chrono::{Datelike, NaiveDate, Utc};
use entity::sea_orm_active_enums::UserStatus;
use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::profile::ProfileFactory};

use crate::server::{
    error::AppError,
    model::user::{UpdateProfileParams, UpdateUserParams},
    service::user::{BirthdateQuery, UserService},
};

mod birthdate;
mod delete;
mod membership_card;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates a member of `team_id` born on `birthdate` and returns its user id.
async fn member_born(
    db: &DatabaseConnection,
    team_id: i32,
    birthdate: NaiveDate,
) -> Result<i32, AppError> {
    let role = factory::create_role(db).await?;
    let user = factory::create_user(db, role.id).await?;
    ProfileFactory::new(db, user.id, team_id)
        .birthdate(birthdate)
        .build()
        .await?;

    Ok(user.id)
}
