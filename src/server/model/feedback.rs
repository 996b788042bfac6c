//! Feedback and feedback answer parameters.

use entity::sea_orm_active_enums::{FeedbackStatus, FeedbackType};
use sea_orm::ActiveValue;

use crate::{
    model::feedback::{
        CreateFeedbackAnswerDto, CreateFeedbackDto, FeedbackAnswerDto, FeedbackDto,
        UpdateFeedbackAnswerDto, UpdateFeedbackDto,
    },
    server::{data::soft_delete::Changes, error::AppError, util::validate},
};

#[derive(Debug, Clone)]
pub struct CreateFeedbackParams {
    pub kind: FeedbackType,
    pub title: String,
    pub content: String,
    pub author_user_id: i32,
}

impl CreateFeedbackParams {
    pub fn from_dto(dto: CreateFeedbackDto) -> Result<Self, AppError> {
        Ok(Self {
            kind: dto.kind,
            title: validate::text("Title", dto.title, 3, 100)?,
            content: validate::text("Content", dto.content, 3, 1000)?,
            author_user_id: dto.author_id,
        })
    }

    /// New feedback always starts as pending.
    pub fn into_active_model(self, author_id: i32) -> entity::feedback::ActiveModel {
        entity::feedback::ActiveModel {
            kind: ActiveValue::Set(self.kind),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            status: ActiveValue::Set(FeedbackStatus::Pending),
            author_id: ActiveValue::Set(author_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFeedbackParams {
    pub kind: Option<FeedbackType>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<FeedbackStatus>,
}

impl UpdateFeedbackParams {
    pub fn from_dto(dto: UpdateFeedbackDto) -> Result<Self, AppError> {
        Ok(Self {
            kind: dto.kind,
            title: dto
                .title
                .map(|v| validate::text("Title", v, 3, 100))
                .transpose()?,
            content: dto
                .content
                .map(|v| validate::text("Content", v, 3, 1000))
                .transpose()?,
            status: dto.status,
        })
    }

    pub fn resolved() -> Self {
        Self {
            status: Some(FeedbackStatus::Resolved),
            ..Default::default()
        }
    }
}

impl Changes<entity::feedback::Entity> for UpdateFeedbackParams {
    fn apply(self, model: &mut entity::feedback::ActiveModel) {
        if let Some(kind) = self.kind {
            model.kind = ActiveValue::Set(kind);
        }
        if let Some(title) = self.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(content) = self.content {
            model.content = ActiveValue::Set(content);
        }
        if let Some(status) = self.status {
            model.status = ActiveValue::Set(status);
        }
    }
}

impl From<entity::feedback::Model> for FeedbackDto {
    fn from(feedback: entity::feedback::Model) -> Self {
        Self {
            id: feedback.id,
            kind: feedback.kind,
            title: feedback.title,
            content: feedback.content,
            status: feedback.status,
            author_id: feedback.author_id,
            created_at: feedback.created_at,
            updated_at: feedback.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFeedbackAnswerParams {
    pub content: String,
    pub author_user_id: i32,
    pub feedback_id: i32,
}

impl CreateFeedbackAnswerParams {
    pub fn from_dto(dto: CreateFeedbackAnswerDto) -> Result<Self, AppError> {
        Ok(Self {
            content: validate::text("Content", dto.content, 3, 1000)?,
            author_user_id: dto.author_id,
            feedback_id: dto.feedback_id,
        })
    }

    pub fn into_active_model(self, author_id: i32) -> entity::feedback_answer::ActiveModel {
        entity::feedback_answer::ActiveModel {
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(author_id),
            feedback_id: ActiveValue::Set(self.feedback_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFeedbackAnswerParams {
    pub content: Option<String>,
}

impl UpdateFeedbackAnswerParams {
    pub fn from_dto(dto: UpdateFeedbackAnswerDto) -> Result<Self, AppError> {
        Ok(Self {
            content: dto
                .content
                .map(|v| validate::text("Content", v, 3, 1000))
                .transpose()?,
        })
    }
}

impl Changes<entity::feedback_answer::Entity> for UpdateFeedbackAnswerParams {
    fn apply(self, model: &mut entity::feedback_answer::ActiveModel) {
        if let Some(content) = self.content {
            model.content = ActiveValue::Set(content);
        }
    }
}

impl From<entity::feedback_answer::Model> for FeedbackAnswerDto {
    fn from(answer: entity::feedback_answer::Model) -> Self {
        Self {
            id: answer.id,
            content: answer.content,
            author_id: answer.author_id,
            feedback_id: answer.feedback_id,
            created_at: answer.created_at,
            updated_at: answer.updated_at,
        }
    }
}
