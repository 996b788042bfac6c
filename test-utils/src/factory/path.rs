use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a ride path with a unique generated name.
pub async fn create_path(db: &DatabaseConnection) -> Result<entity::path::Model, DbErr> {
    entity::path::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(format!("Path {}", next_id())),
        data: ActiveValue::Set("[[6.2442,-75.5812],[6.1551,-75.3737]]".to_string()),
        deleted: ActiveValue::Set(false),
        deleted_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now()),
        updated_at: ActiveValue::Set(now()),
    }
    .insert(db)
    .await
}
