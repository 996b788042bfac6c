use sea_orm::ActiveValue;

use crate::{
    model::role::{CreateRoleDto, RoleDto, UpdateRoleDto},
    server::{data::soft_delete::Changes, error::AppError, util::validate},
};

/// Name of the role every new account receives unless another is requested.
pub const MEMBER_ROLE: &str = "member";

/// Name of the role allowed to manage roles and other accounts.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone)]
pub struct CreateRoleParams {
    pub name: String,
    pub description: Option<String>,
}

impl CreateRoleParams {
    pub fn from_dto(dto: CreateRoleDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::text("Name", dto.name, 3, 20)?,
            description: validate::optional_text("Description", dto.description, 50)?,
        })
    }

    pub fn into_active_model(self) -> entity::role::ActiveModel {
        entity::role::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoleParams {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl UpdateRoleParams {
    pub fn from_dto(dto: UpdateRoleDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto
                .name
                .map(|name| validate::text("Name", name, 3, 20))
                .transpose()?,
            description: dto
                .description
                .map(|d| validate::optional_text("Description", d, 50))
                .transpose()?,
        })
    }
}

impl Changes<entity::role::Entity> for UpdateRoleParams {
    fn apply(self, model: &mut entity::role::ActiveModel) {
        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = self.description {
            model.description = ActiveValue::Set(description);
        }
    }
}

impl From<entity::role::Model> for RoleDto {
    fn from(role: entity::role::Model) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            created_at: role.created_at,
            updated_at: role.updated_at,
        }
    }
}
