use crate::factory::helpers::{next_id, now};
use entity::sea_orm_active_enums::PostStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating blog posts.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    status: PostStatus,
    author_id: i32,
}

impl<'a> PostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        Self {
            db,
            title: format!("Post {}", next_id()),
            status: PostStatus::Unpublished,
            author_id,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let slug = self.title.to_lowercase().replace(' ', "-");
        entity::post::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(slug),
            content: ActiveValue::Set("Route report and pictures.".to_string()),
            status: ActiveValue::Set(self.status),
            thumbnail: ActiveValue::Set(None),
            author_id: ActiveValue::Set(self.author_id),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now()),
            updated_at: ActiveValue::Set(now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unpublished post written by `author_id` (a profile id).
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
