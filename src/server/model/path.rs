use sea_orm::ActiveValue;

use crate::{
    model::path::{CreatePathDto, PathDto, UpdatePathDto},
    server::{data::soft_delete::Changes, error::AppError, util::validate},
};

#[derive(Debug, Clone)]
pub struct CreatePathParams {
    pub name: String,
    pub data: String,
}

impl CreatePathParams {
    pub fn from_dto(dto: CreatePathDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::text("Name", dto.name, 3, 50)?,
            data: validate::text("Data", dto.data, 1, usize::MAX)?,
        })
    }

    pub fn into_active_model(self) -> entity::path::ActiveModel {
        entity::path::ActiveModel {
            name: ActiveValue::Set(self.name),
            data: ActiveValue::Set(self.data),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePathParams {
    pub name: Option<String>,
    pub data: Option<String>,
}

impl UpdatePathParams {
    pub fn from_dto(dto: UpdatePathDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto
                .name
                .map(|name| validate::text("Name", name, 3, 50))
                .transpose()?,
            data: dto
                .data
                .map(|data| validate::text("Data", data, 1, usize::MAX))
                .transpose()?,
        })
    }
}

impl Changes<entity::path::Entity> for UpdatePathParams {
    fn apply(self, model: &mut entity::path::ActiveModel) {
        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(data) = self.data {
            model.data = ActiveValue::Set(data);
        }
    }
}

impl From<entity::path::Model> for PathDto {
    fn from(path: entity::path::Model) -> Self {
        Self {
            id: path.id,
            name: path.name,
            data: path.data,
            created_at: path.created_at,
            updated_at: path.updated_at,
        }
    }
}
