//! Brand and motorcycle parameters.

use sea_orm::ActiveValue;

use crate::{
    model::motorcycle::{
        BrandDto, CreateBrandDto, CreateMotorcycleDto, MotorcycleDto, UpdateBrandDto,
        UpdateMotorcycleDto,
    },
    server::{data::soft_delete::Changes, error::AppError, util::validate},
};

#[derive(Debug, Clone)]
pub struct CreateBrandParams {
    pub name: String,
}

impl CreateBrandParams {
    pub fn from_dto(dto: CreateBrandDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::text("Name", dto.name, 3, 25)?,
        })
    }

    pub fn into_active_model(self) -> entity::brand::ActiveModel {
        entity::brand::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBrandParams {
    pub name: Option<String>,
}

impl UpdateBrandParams {
    pub fn from_dto(dto: UpdateBrandDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto
                .name
                .map(|v| validate::text("Name", v, 3, 25))
                .transpose()?,
        })
    }
}

impl Changes<entity::brand::Entity> for UpdateBrandParams {
    fn apply(self, model: &mut entity::brand::ActiveModel) {
        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
    }
}

impl From<entity::brand::Model> for BrandDto {
    fn from(brand: entity::brand::Model) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
            created_at: brand.created_at,
            updated_at: brand.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMotorcycleParams {
    pub model: String,
    pub license_plate: String,
    pub photo: Option<String>,
    pub brand_id: i32,
    /// User id, resolved to a profile by the service.
    pub owner_user_id: i32,
}

impl CreateMotorcycleParams {
    pub fn from_dto(dto: CreateMotorcycleDto) -> Result<Self, AppError> {
        Ok(Self {
            model: validate::text("Model", dto.model, 3, 25)?,
            license_plate: validate::license_plate(&dto.license_plate)?,
            photo: validate::optional_text("Photo", dto.photo, 255)?,
            brand_id: dto.brand_id,
            owner_user_id: dto.owner_id,
        })
    }

    pub fn into_active_model(self, owner_id: i32) -> entity::motorcycle::ActiveModel {
        entity::motorcycle::ActiveModel {
            model: ActiveValue::Set(self.model),
            license_plate: ActiveValue::Set(self.license_plate),
            photo: ActiveValue::Set(self.photo),
            brand_id: ActiveValue::Set(self.brand_id),
            owner_id: ActiveValue::Set(owner_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMotorcycleParams {
    pub model: Option<String>,
    pub license_plate: Option<String>,
    pub photo: Option<Option<String>>,
    pub brand_id: Option<i32>,
}

impl UpdateMotorcycleParams {
    pub fn from_dto(dto: UpdateMotorcycleDto) -> Result<Self, AppError> {
        Ok(Self {
            model: dto
                .model
                .map(|v| validate::text("Model", v, 3, 25))
                .transpose()?,
            license_plate: dto
                .license_plate
                .map(|v| validate::license_plate(&v))
                .transpose()?,
            photo: dto
                .photo
                .map(|v| validate::optional_text("Photo", v, 255))
                .transpose()?,
            brand_id: dto.brand_id,
        })
    }
}

impl Changes<entity::motorcycle::Entity> for UpdateMotorcycleParams {
    fn apply(self, model: &mut entity::motorcycle::ActiveModel) {
        if let Some(value) = self.model {
            model.model = ActiveValue::Set(value);
        }
        if let Some(license_plate) = self.license_plate {
            model.license_plate = ActiveValue::Set(license_plate);
        }
        if let Some(photo) = self.photo {
            model.photo = ActiveValue::Set(photo);
        }
        if let Some(brand_id) = self.brand_id {
            model.brand_id = ActiveValue::Set(brand_id);
        }
    }
}

impl From<entity::motorcycle::Model> for MotorcycleDto {
    fn from(motorcycle: entity::motorcycle::Model) -> Self {
        Self {
            id: motorcycle.id,
            model: motorcycle.model,
            license_plate: motorcycle.license_plate,
            photo: motorcycle.photo,
            brand_id: motorcycle.brand_id,
            owner_id: motorcycle.owner_id,
            created_at: motorcycle.created_at,
            updated_at: motorcycle.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_license_plate() {
        let params = CreateMotorcycleParams::from_dto(CreateMotorcycleDto {
            model: "Duke 390".to_string(),
            license_plate: "abc123".to_string(),
            photo: None,
            brand_id: 1,
            owner_id: 1,
        })
        .unwrap();

        assert_eq!(params.license_plate, "ABC123");
    }
}
