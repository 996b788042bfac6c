//! Tag and post parameters.

use entity::sea_orm_active_enums::PostStatus;
use sea_orm::ActiveValue;

use crate::{
    model::post::{CreatePostDto, CreateTagDto, PostDto, TagDto, UpdatePostDto, UpdateTagDto},
    server::{
        data::soft_delete::Changes,
        error::AppError,
        util::{slug::slugify, validate},
    },
};

#[derive(Debug, Clone)]
pub struct CreateTagParams {
    pub name: String,
}

impl CreateTagParams {
    pub fn from_dto(dto: CreateTagDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::text("Name", dto.name, 3, 15)?,
        })
    }

    pub fn into_active_model(self) -> entity::tag::ActiveModel {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTagParams {
    pub name: Option<String>,
}

impl UpdateTagParams {
    pub fn from_dto(dto: UpdateTagDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto
                .name
                .map(|v| validate::text("Name", v, 3, 15))
                .transpose()?,
        })
    }
}

impl Changes<entity::tag::Entity> for UpdateTagParams {
    fn apply(self, model: &mut entity::tag::ActiveModel) {
        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
    }
}

impl From<entity::tag::Model> for TagDto {
    fn from(tag: entity::tag::Model) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PostStatus,
    pub thumbnail: Option<String>,
    /// User id, resolved to a profile by the service.
    pub author_user_id: i32,
    pub tag_ids: Vec<i32>,
}

impl CreatePostParams {
    pub fn from_dto(dto: CreatePostDto) -> Result<Self, AppError> {
        let title = validate::text("Title", dto.title, 3, 100)?;
        let slug = slugify(&title);
        if slug.is_empty() {
            return Err(AppError::BadRequest(
                "Title must contain at least one letter or digit.".to_string(),
            ));
        }

        let mut tag_ids = dto.tag_ids;
        tag_ids.sort_unstable();
        tag_ids.dedup();

        Ok(Self {
            title,
            slug,
            content: validate::text("Content", dto.content, 1, 2500)?,
            status: dto.status.unwrap_or(PostStatus::Unpublished),
            thumbnail: validate::optional_text("Thumbnail", dto.thumbnail, 255)?,
            author_user_id: dto.author_id,
            tag_ids,
        })
    }

    pub fn into_active_model(self, author_id: i32) -> entity::post::ActiveModel {
        entity::post::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            content: ActiveValue::Set(self.content),
            status: ActiveValue::Set(self.status),
            thumbnail: ActiveValue::Set(self.thumbnail),
            author_id: ActiveValue::Set(author_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePostParams {
    pub title: Option<String>,
    /// Follows the title; never set on its own.
    pub slug: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
    pub thumbnail: Option<Option<String>>,
}

impl UpdatePostParams {
    pub fn from_dto(dto: UpdatePostDto) -> Result<Self, AppError> {
        let title = dto
            .title
            .map(|v| validate::text("Title", v, 3, 100))
            .transpose()?;
        let slug = title.as_deref().map(slugify);
        if slug.as_deref() == Some("") {
            return Err(AppError::BadRequest(
                "Title must contain at least one letter or digit.".to_string(),
            ));
        }

        Ok(Self {
            title,
            slug,
            content: dto
                .content
                .map(|v| validate::text("Content", v, 1, 2500))
                .transpose()?,
            status: dto.status,
            thumbnail: dto
                .thumbnail
                .map(|v| validate::optional_text("Thumbnail", v, 255))
                .transpose()?,
        })
    }
}

impl Changes<entity::post::Entity> for UpdatePostParams {
    fn apply(self, model: &mut entity::post::ActiveModel) {
        if let Some(title) = self.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(slug) = self.slug {
            model.slug = ActiveValue::Set(slug);
        }
        if let Some(content) = self.content {
            model.content = ActiveValue::Set(content);
        }
        if let Some(status) = self.status {
            model.status = ActiveValue::Set(status);
        }
        if let Some(thumbnail) = self.thumbnail {
            model.thumbnail = ActiveValue::Set(thumbnail);
        }
    }
}

impl From<entity::post::Model> for PostDto {
    fn from(post: entity::post::Model) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            status: post.status,
            thumbnail: post.thumbnail,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(title: &str) -> CreatePostDto {
        CreatePostDto {
            title: title.to_string(),
            content: "Route notes for the weekend.".to_string(),
            status: None,
            thumbnail: None,
            author_id: 1,
            tag_ids: vec![3, 1, 3],
        }
    }

    #[test]
    fn derives_slug_from_title() {
        let params = CreatePostParams::from_dto(create_dto("Ruta al Páramo")).unwrap();

        assert_eq!(params.slug, "ruta-al-paramo");
        assert_eq!(params.status, PostStatus::Unpublished);
        assert_eq!(params.tag_ids, vec![1, 3]);
    }

    #[test]
    fn rejects_title_without_slug_characters() {
        assert!(CreatePostParams::from_dto(create_dto("?!?")).is_err());
    }

    #[test]
    fn title_change_regenerates_slug() {
        let params = UpdatePostParams::from_dto(UpdatePostDto {
            title: Some("New Route".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(params.slug.as_deref(), Some("new-route"));
    }
}
