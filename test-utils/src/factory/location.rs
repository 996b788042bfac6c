//! Location factory.

use crate::factory::helpers::{next_id, now};
use crate::fixture;
use entity::sea_orm_active_enums::LocationType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations. Defaults to a city without department.
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::location::Model,
}

impl<'a> LocationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::location::entity_builder()
            .name(format!("City {}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn kind(mut self, kind: LocationType) -> Self {
        self.entity.kind = kind;
        self
    }

    pub fn is_capital(mut self, is_capital: bool) -> Self {
        self.entity.is_capital = is_capital;
        self
    }

    pub fn department_id(mut self, department_id: i32) -> Self {
        self.entity.department_id = Some(department_id);
        self
    }

    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            kind: ActiveValue::Set(self.entity.kind),
            is_capital: ActiveValue::Set(self.entity.is_capital),
            department_id: ActiveValue::Set(self.entity.department_id),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now()),
            updated_at: ActiveValue::Set(now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with a unique generated name.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}
