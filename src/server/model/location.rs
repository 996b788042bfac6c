use sea_orm::ActiveValue;

use crate::{
    model::location::{CreateLocationDto, LocationDto, UpdateLocationDto},
    server::{data::soft_delete::Changes, error::AppError, util::validate},
};

#[derive(Debug, Clone)]
pub struct CreateLocationParams {
    pub name: String,
    pub kind: entity::sea_orm_active_enums::LocationType,
    pub is_capital: bool,
    pub department_id: Option<i32>,
}

impl CreateLocationParams {
    pub fn from_dto(dto: CreateLocationDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::text("Name", dto.name, 3, 50)?,
            kind: dto.kind,
            is_capital: dto.is_capital,
            department_id: dto.department_id,
        })
    }

    pub fn into_active_model(self) -> entity::location::ActiveModel {
        entity::location::ActiveModel {
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(self.kind),
            is_capital: ActiveValue::Set(self.is_capital),
            department_id: ActiveValue::Set(self.department_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLocationParams {
    pub name: Option<String>,
    pub kind: Option<entity::sea_orm_active_enums::LocationType>,
    pub is_capital: Option<bool>,
    pub department_id: Option<Option<i32>>,
}

impl UpdateLocationParams {
    pub fn from_dto(dto: UpdateLocationDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto
                .name
                .map(|name| validate::text("Name", name, 3, 50))
                .transpose()?,
            kind: dto.kind,
            is_capital: dto.is_capital,
            department_id: dto.department_id,
        })
    }
}

impl Changes<entity::location::Entity> for UpdateLocationParams {
    fn apply(self, model: &mut entity::location::ActiveModel) {
        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(kind) = self.kind {
            model.kind = ActiveValue::Set(kind);
        }
        if let Some(is_capital) = self.is_capital {
            model.is_capital = ActiveValue::Set(is_capital);
        }
        if let Some(department_id) = self.department_id {
            model.department_id = ActiveValue::Set(department_id);
        }
    }
}

impl From<entity::location::Model> for LocationDto {
    fn from(location: entity::location::Model) -> Self {
        Self {
            id: location.id,
            name: location.name,
            kind: location.kind,
            is_capital: location.is_capital,
            department_id: location.department_id,
            created_at: location.created_at,
            updated_at: location.updated_at,
        }
    }
}
