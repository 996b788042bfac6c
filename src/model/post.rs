use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PostStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTagDto {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTagDto {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[schema(value_type = String, example = "publicado")]
    pub status: PostStatus,
    pub thumbnail: Option<String>,
    /// Profile id of the author
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
    #[schema(value_type = Option<String>)]
    pub status: Option<PostStatus>,
    pub thumbnail: Option<String>,
    /// User id of the author
    pub author_id: i32,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub content: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<PostStatus>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<String>)]
    pub thumbnail: Option<Option<String>>,
}
