use entity::path;
use sea_orm::{ColumnTrait, DatabaseConnection};

use crate::server::{
    error::AppError,
    model::{
        pagination::{ListQuery, Paginated},
        path::{CreatePathParams, UpdatePathParams},
    },
    service::crud::CrudService,
};

pub struct PathService<'a> {
    db: &'a DatabaseConnection,
    paths: CrudService<'a, path::Entity>,
}

impl<'a> PathService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            paths: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<path::Model>, AppError> {
        self.paths.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<path::Model, AppError> {
        self.paths.get(id).await
    }

    pub async fn create(&self, params: CreatePathParams) -> Result<path::Model, AppError> {
        let name = params.name.clone();
        self.paths
            .create_unique(params.into_active_model(), &name)
            .await
    }

    pub async fn update(&self, id: i32, params: UpdatePathParams) -> Result<path::Model, AppError> {
        let name = params.name.clone();
        self.paths.update_unique(id, params, name.as_deref()).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.paths.delete(id, hard).await
    }

    pub async fn events(&self, id: i32) -> Result<Vec<entity::event::Model>, AppError> {
        self.paths.require(id).await?;

        CrudService::<entity::event::Entity>::new(self.db)
            .find_where(entity::event::Column::PathId.eq(id))
            .await
    }
}
