use entity::{brand, motorcycle};
use sea_orm::{ColumnTrait, DatabaseConnection};

use crate::{
    model::user::UserDto,
    server::{
        error::AppError,
        model::{
            motorcycle::{
                CreateBrandParams, CreateMotorcycleParams, UpdateBrandParams,
                UpdateMotorcycleParams,
            },
            pagination::{ListQuery, Paginated},
        },
        service::{crud::CrudService, member::MemberService},
    },
};

pub struct BrandService<'a> {
    db: &'a DatabaseConnection,
    brands: CrudService<'a, brand::Entity>,
}

impl<'a> BrandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            brands: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<brand::Model>, AppError> {
        self.brands.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<brand::Model, AppError> {
        self.brands.get(id).await
    }

    pub async fn create(&self, params: CreateBrandParams) -> Result<brand::Model, AppError> {
        let name = params.name.clone();
        self.brands
            .create_unique(params.into_active_model(), &name)
            .await
    }

    pub async fn update(&self, id: i32, params: UpdateBrandParams) -> Result<brand::Model, AppError> {
        let name = params.name.clone();
        self.brands.update_unique(id, params, name.as_deref()).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.brands.delete(id, hard).await
    }

    pub async fn motorcycles(&self, id: i32) -> Result<Vec<motorcycle::Model>, AppError> {
        self.brands.require(id).await?;

        CrudService::<motorcycle::Entity>::new(self.db)
            .find_where(motorcycle::Column::BrandId.eq(id))
            .await
    }
}

pub struct MotorcycleService<'a> {
    db: &'a DatabaseConnection,
    motorcycles: CrudService<'a, motorcycle::Entity>,
}

impl<'a> MotorcycleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            motorcycles: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<motorcycle::Model>, AppError> {
        self.motorcycles.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<motorcycle::Model, AppError> {
        self.motorcycles.get(id).await
    }

    pub async fn create(
        &self,
        params: CreateMotorcycleParams,
    ) -> Result<motorcycle::Model, AppError> {
        CrudService::<brand::Entity>::new(self.db)
            .require(params.brand_id)
            .await?;
        let owner = MemberService::new(self.db)
            .profile_of(params.owner_user_id)
            .await?;

        let plate = params.license_plate.clone();
        self.motorcycles
            .create_unique(params.into_active_model(owner.id), &plate)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateMotorcycleParams,
    ) -> Result<motorcycle::Model, AppError> {
        self.motorcycles.require(id).await?;
        CrudService::<brand::Entity>::new(self.db)
            .require_opt(params.brand_id)
            .await?;

        let plate = params.license_plate.clone();
        self.motorcycles
            .update_unique(id, params, plate.as_deref())
            .await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.motorcycles.delete(id, hard).await
    }

    pub async fn brand(&self, id: i32) -> Result<brand::Model, AppError> {
        let motorcycle = self.motorcycles.get(id).await?;

        CrudService::<brand::Entity>::new(self.db)
            .get(motorcycle.brand_id)
            .await
    }

    pub async fn owner(&self, id: i32) -> Result<UserDto, AppError> {
        let motorcycle = self.motorcycles.get(id).await?;

        MemberService::new(self.db)
            .user_of_profile(motorcycle.owner_id)
            .await
    }

    /// Motorcycles owned by the member with account `user_id`.
    pub async fn by_user(&self, user_id: i32) -> Result<Vec<motorcycle::Model>, AppError> {
        let owner = MemberService::new(self.db).profile_of(user_id).await?;

        self.motorcycles
            .find_where(motorcycle::Column::OwnerId.eq(owner.id))
            .await
    }
}
