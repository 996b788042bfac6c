use crate::factory::helpers::{next_id, now};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tag with a unique generated name.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(format!("tag{}", next_id())),
        deleted: ActiveValue::Set(false),
        deleted_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now()),
        updated_at: ActiveValue::Set(now()),
    }
    .insert(db)
    .await
}
