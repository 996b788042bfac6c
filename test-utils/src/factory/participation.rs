use crate::factory::helpers::now;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a participation of `member_id` (a profile id) in `event_id`.
pub async fn create_participation(
    db: &DatabaseConnection,
    member_id: i32,
    event_id: i32,
    attended: bool,
) -> Result<entity::participation::Model, DbErr> {
    entity::participation::ActiveModel {
        id: ActiveValue::NotSet,
        attended: ActiveValue::Set(attended),
        member_id: ActiveValue::Set(member_id),
        event_id: ActiveValue::Set(event_id),
        deleted: ActiveValue::Set(false),
        deleted_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now()),
        updated_at: ActiveValue::Set(now()),
    }
    .insert(db)
    .await
}
