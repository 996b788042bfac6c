use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{FeedbackStatus, FeedbackType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackDto {
    pub id: i32,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "sugerencia")]
    pub kind: FeedbackType,
    pub title: String,
    pub content: String,
    #[schema(value_type = String, example = "pendiente")]
    pub status: FeedbackStatus,
    /// Profile id of the author
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFeedbackDto {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "sugerencia")]
    pub kind: FeedbackType,
    pub title: String,
    pub content: String,
    /// User id of the author
    pub author_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFeedbackDto {
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<FeedbackType>,
    pub title: Option<String>,
    pub content: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<FeedbackStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackAnswerDto {
    pub id: i32,
    pub content: String,
    /// Profile id of the author
    pub author_id: i32,
    pub feedback_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFeedbackAnswerDto {
    pub content: String,
    /// User id of the author
    pub author_id: i32,
    pub feedback_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFeedbackAnswerDto {
    pub content: Option<String>,
}
