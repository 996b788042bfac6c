use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating sponsoring companies.
pub struct CompanyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location_id: i32,
}

impl<'a> CompanyFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, location_id: i32) -> Self {
        Self {
            db,
            name: format!("Company {}", next_id()),
            location_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            contact_name: ActiveValue::Set("Carlos Gómez".to_string()),
            contact_telephone: ActiveValue::Set("3109876543".to_string()),
            contact_address: ActiveValue::Set(None),
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

/// Creates a company with a unique generated name.
pub async fn create_company(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<entity::company::Model, DbErr> {
    CompanyFactory::new(db, location_id).build().await
}
