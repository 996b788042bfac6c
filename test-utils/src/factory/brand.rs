use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a motorcycle brand with a unique generated name.
pub async fn create_brand(db: &DatabaseConnection) -> Result<entity::brand::Model, DbErr> {
    entity::brand::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(format!("Brand {}", next_id())),
        deleted: ActiveValue::Set(false),
        deleted_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now()),
        updated_at: ActiveValue::Set(now()),
    }
    .insert(db)
    .await
}
