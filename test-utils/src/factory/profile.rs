use chrono::NaiveDate;
use crate::factory::helpers::{next_id, now};
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating member profiles.
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::profile::Model,
}

impl<'a> ProfileFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, team_id: i32) -> Self {
        let entity = fixture::profile::entity_builder()
            .document_number(format!("10{:08}", next_id()))
            .user_id(user_id)
            .team_id(team_id)
            .build();

        Self { db, entity }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    pub fn birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.entity.birthdate = birthdate;
        self
    }

    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        let profile = self.entity;
        entity::profile::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(profile.first_name),
            last_name: ActiveValue::Set(profile.last_name),
            nickname: ActiveValue::Set(profile.nickname),
            telephone: ActiveValue::Set(profile.telephone),
            document_type: ActiveValue::Set(profile.document_type),
            document_number: ActiveValue::Set(profile.document_number),
            rh: ActiveValue::Set(profile.rh),
            birthdate: ActiveValue::Set(profile.birthdate),
            gender: ActiveValue::Set(profile.gender),
            photo: ActiveValue::Set(profile.photo),
            user_id: ActiveValue::Set(profile.user_id),
            team_id: ActiveValue::Set(profile.team_id),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now()),
            updated_at: ActiveValue::Set(now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile for `user_id` in `team_id` with default personal data.
pub async fn create_profile(
    db: &DatabaseConnection,
    user_id: i32,
    team_id: i32,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db, user_id, team_id).build().await
}
