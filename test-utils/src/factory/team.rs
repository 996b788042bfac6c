use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location_id: i32,
}

impl<'a> TeamFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, location_id: i32) -> Self {
        Self {
            db,
            name: format!("Team {}", next_id()),
            location_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            location_id: ActiveValue::Set(self.location_id),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now()),
            updated_at: ActiveValue::Set(now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with a unique generated name in the given location.
pub async fn create_team(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, location_id).build().await
}
