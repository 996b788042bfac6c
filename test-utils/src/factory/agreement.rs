//! Agreement factory for creating test agreement entities.

use crate::factory::helpers::{next_id, now};
use crate::fixture;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test agreements.
///
/// Defaults are sourced from `fixture::agreement::entity()` with a unique name.
///
/// # Example
///
/// ```rust,ignore
/// let agreement = AgreementFactory::new(&db, company.id)
///     .name("Fuel discount")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct AgreementFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::agreement::Model,
}

impl<'a> AgreementFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        let entity = fixture::agreement::entity_builder()
            .name(format!("Agreement {}", next_id()))
            .company_id(company_id)
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.entity.start_date = start_date;
        self.entity.end_date = end_date;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::agreement::Model, DbErr> {
        entity::agreement::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            start_date: ActiveValue::Set(self.entity.start_date),
            end_date: ActiveValue::Set(self.entity.end_date),
            active: ActiveValue::Set(self.entity.active),
            company_id: ActiveValue::Set(self.entity.company_id),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now()),
            updated_at: ActiveValue::Set(now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an agreement with default values for the given company.
pub async fn create_agreement(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::agreement::Model, DbErr> {
    AgreementFactory::new(db, company_id).build().await
}
