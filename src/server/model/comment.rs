//! Comment and reaction parameters.

use entity::sea_orm_active_enums::ReactionType;
use sea_orm::ActiveValue;

use crate::{
    model::comment::{
        CommentDto, CreateCommentDto, CreateReactionDto, ReactionDto, UpdateCommentDto,
        UpdateReactionDto,
    },
    server::{data::soft_delete::Changes, error::AppError, util::validate},
};

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub content: String,
    /// User id, resolved to a profile by the service.
    pub author_user_id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto) -> Result<Self, AppError> {
        Ok(Self {
            content: validate::text("Content", dto.content, 3, 500)?,
            author_user_id: dto.author_id,
            post_id: dto.post_id,
            parent_id: dto.parent_id,
        })
    }

    pub fn into_active_model(self, author_id: i32) -> entity::comment::ActiveModel {
        entity::comment::ActiveModel {
            content: ActiveValue::Set(self.content),
            is_flagged: ActiveValue::Set(false),
            author_id: ActiveValue::Set(author_id),
            post_id: ActiveValue::Set(self.post_id),
            parent_id: ActiveValue::Set(self.parent_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCommentParams {
    pub content: Option<String>,
    pub is_flagged: Option<bool>,
}

impl UpdateCommentParams {
    pub fn from_dto(dto: UpdateCommentDto) -> Result<Self, AppError> {
        Ok(Self {
            content: dto
                .content
                .map(|v| validate::text("Content", v, 3, 500))
                .transpose()?,
            is_flagged: dto.is_flagged,
        })
    }
}

impl Changes<entity::comment::Entity> for UpdateCommentParams {
    fn apply(self, model: &mut entity::comment::ActiveModel) {
        if let Some(content) = self.content {
            model.content = ActiveValue::Set(content);
        }
        if let Some(is_flagged) = self.is_flagged {
            model.is_flagged = ActiveValue::Set(is_flagged);
        }
    }
}

impl From<entity::comment::Model> for CommentDto {
    fn from(comment: entity::comment::Model) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            is_flagged: comment.is_flagged,
            author_id: comment.author_id,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReactionParams {
    pub kind: ReactionType,
    pub comment_id: i32,
    pub author_user_id: i32,
}

impl CreateReactionParams {
    pub fn from_dto(dto: CreateReactionDto) -> Self {
        Self {
            kind: dto.kind,
            comment_id: dto.comment_id,
            author_user_id: dto.author_id,
        }
    }

    pub fn into_active_model(self, author_id: i32) -> entity::comment_reaction::ActiveModel {
        entity::comment_reaction::ActiveModel {
            kind: ActiveValue::Set(self.kind),
            comment_id: ActiveValue::Set(self.comment_id),
            author_id: ActiveValue::Set(author_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReactionParams {
    pub kind: Option<ReactionType>,
}

impl UpdateReactionParams {
    pub fn from_dto(dto: UpdateReactionDto) -> Self {
        Self { kind: dto.kind }
    }
}

impl Changes<entity::comment_reaction::Entity> for UpdateReactionParams {
    fn apply(self, model: &mut entity::comment_reaction::ActiveModel) {
        if let Some(kind) = self.kind {
            model.kind = ActiveValue::Set(kind);
        }
    }
}

impl From<entity::comment_reaction::Model> for ReactionDto {
    fn from(reaction: entity::comment_reaction::Model) -> Self {
        Self {
            id: reaction.id,
            kind: reaction.kind,
            comment_id: reaction.comment_id,
            author_id: reaction.author_id,
            created_at: reaction.created_at,
            updated_at: reaction.updated_at,
        }
    }
}
