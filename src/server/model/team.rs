use sea_orm::ActiveValue;

use crate::{
    model::team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    server::{data::soft_delete::Changes, error::AppError, util::validate},
};

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub location_id: i32,
}

impl CreateTeamParams {
    pub fn from_dto(dto: CreateTeamDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::text("Name", dto.name, 3, 50)?,
            location_id: dto.location_id,
        })
    }

    pub fn into_active_model(self) -> entity::team::ActiveModel {
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            location_id: ActiveValue::Set(self.location_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTeamParams {
    pub name: Option<String>,
    pub location_id: Option<i32>,
}

impl UpdateTeamParams {
    pub fn from_dto(dto: UpdateTeamDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto
                .name
                .map(|name| validate::text("Name", name, 3, 50))
                .transpose()?,
            location_id: dto.location_id,
        })
    }
}

impl Changes<entity::team::Entity> for UpdateTeamParams {
    fn apply(self, model: &mut entity::team::ActiveModel) {
        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(location_id) = self.location_id {
            model.location_id = ActiveValue::Set(location_id);
        }
    }
}

impl From<entity::team::Model> for TeamDto {
    fn from(team: entity::team::Model) -> Self {
        Self {
            id: team.id,
            name: team.name,
            location_id: team.location_id,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}
