use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a motorcycle with a unique plate owned by `owner_id` (a profile id).
pub async fn create_motorcycle(
    db: &DatabaseConnection,
    brand_id: i32,
    owner_id: i32,
) -> Result<entity::motorcycle::Model, DbErr> {
    entity::motorcycle::ActiveModel {
        id: ActiveValue::NotSet,
        model: ActiveValue::Set("Duke 390".to_string()),
        license_plate: ActiveValue::Set(format!("ABC{:03}", next_id() % 1000)),
        photo: ActiveValue::Set(None),
        brand_id: ActiveValue::Set(brand_id),
        owner_id: ActiveValue::Set(owner_id),
        deleted: ActiveValue::Set(false),
        deleted_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now()),
        updated_at: ActiveValue::Set(now()),
    }
    .insert(db)
    .await
}
