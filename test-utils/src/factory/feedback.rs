use crate::factory::helpers::{next_id, now};
use entity::sea_orm_active_enums::{FeedbackStatus, FeedbackType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pending suggestion written by `author_id` (a profile id).
pub async fn create_feedback(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::feedback::Model, DbErr> {
    entity::feedback::ActiveModel {
        id: ActiveValue::NotSet,
        kind: ActiveValue::Set(FeedbackType::Suggestion),
        title: ActiveValue::Set(format!("Suggestion {}", next_id())),
        content: ActiveValue::Set("More night rides please.".to_string()),
        status: ActiveValue::Set(FeedbackStatus::Pending),
        author_id: ActiveValue::Set(author_id),
        deleted: ActiveValue::Set(false),
        deleted_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now()),
        updated_at: ActiveValue::Set(now()),
    }
    .insert(db)
    .await
}
