use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test roles.
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> RoleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("role{}", next_id()),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now()),
            updated_at: ActiveValue::Set(now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role with a unique generated name.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).build().await
}
