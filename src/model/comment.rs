use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ReactionType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub content: String,
    pub is_flagged: bool,
    /// Profile id of the author
    pub author_id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub content: String,
    /// User id of the author
    pub author_id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCommentDto {
    pub content: Option<String>,
    pub is_flagged: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReactionDto {
    pub id: i32,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "me gusta")]
    pub kind: ReactionType,
    pub comment_id: i32,
    /// Profile id of the author
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReactionDto {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "me gusta")]
    pub kind: ReactionType,
    pub comment_id: i32,
    /// User id of the author
    pub author_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateReactionDto {
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<ReactionType>,
}
