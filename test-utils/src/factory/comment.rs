use crate::factory::helpers::now;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on `post_id`, optionally replying to `parent_id`.
pub async fn create_comment(
    db: &DatabaseConnection,
    author_id: i32,
    post_id: i32,
    parent_id: Option<i32>,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        id: ActiveValue::NotSet,
        content: ActiveValue::Set("Great ride!".to_string()),
        is_flagged: ActiveValue::Set(false),
        author_id: ActiveValue::Set(author_id),
        post_id: ActiveValue::Set(post_id),
        parent_id: ActiveValue::Set(parent_id),
        deleted: ActiveValue::Set(false),
        deleted_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now()),
        updated_at: ActiveValue::Set(now()),
    }
    .insert(db)
    .await
}
