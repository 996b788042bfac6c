use entity::{location, sea_orm_active_enums::LocationType};
use sea_orm::{ColumnTrait, DatabaseConnection};

use crate::server::{
    error::AppError,
    model::{
        location::{CreateLocationParams, UpdateLocationParams},
        pagination::{ListQuery, Paginated},
    },
    service::crud::CrudService,
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
    locations: CrudService<'a, location::Entity>,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            locations: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<location::Model>, AppError> {
        self.locations.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<location::Model, AppError> {
        self.locations.get(id).await
    }

    pub async fn create(&self, params: CreateLocationParams) -> Result<location::Model, AppError> {
        self.locations.require_opt(params.department_id).await?;

        self.locations.create(params.into_active_model()).await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateLocationParams,
    ) -> Result<location::Model, AppError> {
        self.locations.require(id).await?;
        if let Some(department_id) = params.department_id.flatten() {
            if department_id == id {
                return Err(AppError::BadRequest(
                    "A location cannot be its own department.".to_string(),
                ));
            }
            self.locations.require(department_id).await?;
        }

        self.locations.update(id, params).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.locations.delete(id, hard).await
    }

    /// Department a city belongs to.
    ///
    /// # Returns
    /// - `Ok(location::Model)` - The department
    /// - `Err(AppError::Conflict)` - The location is itself a department
    /// - `Err(AppError::NotFound)` - Unknown location, or a city without department
    pub async fn department(&self, id: i32) -> Result<location::Model, AppError> {
        let location = self.locations.get(id).await?;

        if location.kind == LocationType::Department {
            return Err(AppError::Conflict(format!(
                "The location #{} is already a department!",
                id
            )));
        }

        let Some(department_id) = location.department_id else {
            return Err(AppError::NotFound(format!(
                "Location #{} has no department!",
                id
            )));
        };

        self.locations.get(department_id).await
    }

    /// Cities of a department.
    pub async fn cities(&self, id: i32) -> Result<Vec<location::Model>, AppError> {
        let location = self.locations.get(id).await?;

        if location.kind == LocationType::City {
            return Err(AppError::Conflict(format!(
                "Location #{} is not a department!",
                id
            )));
        }

        self.locations
            .find_where(location::Column::DepartmentId.eq(id))
            .await
    }

    pub async fn teams(&self, id: i32) -> Result<Vec<entity::team::Model>, AppError> {
        self.locations.require(id).await?;

        CrudService::<entity::team::Entity>::new(self.db)
            .find_where(entity::team::Column::LocationId.eq(id))
            .await
    }

    pub async fn events(&self, id: i32) -> Result<Vec<entity::event::Model>, AppError> {
        self.locations.require(id).await?;

        CrudService::<entity::event::Entity>::new(self.db)
            .find_where(entity::event::Column::LocationId.eq(id))
            .await
    }
}
