use sea_orm::{ColumnTrait, DatabaseConnection};

use crate::{
    model::user::UserDto,
    server::{
        error::AppError,
        model::{
            pagination::{ListQuery, Paginated},
            role::{CreateRoleParams, UpdateRoleParams, MEMBER_ROLE},
        },
        service::{crud::CrudService, member::MemberService},
    },
};

use entity::role;

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
    roles: CrudService<'a, role::Entity>,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            roles: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<role::Model>, AppError> {
        self.roles.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<role::Model, AppError> {
        self.roles.get(id).await
    }

    pub async fn create(&self, params: CreateRoleParams) -> Result<role::Model, AppError> {
        let name = params.name.clone();
        let role = self
            .roles
            .create_unique(params.into_active_model(), &name)
            .await?;

        tracing::info!("Created role {} (#{})", role.name, role.id);

        Ok(role)
    }

    pub async fn update(&self, id: i32, params: UpdateRoleParams) -> Result<role::Model, AppError> {
        let name = params.name.clone();
        self.roles.update_unique(id, params, name.as_deref()).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.roles.delete(id, hard).await
    }

    /// Accounts holding the role.
    pub async fn users(&self, id: i32) -> Result<Vec<UserDto>, AppError> {
        self.roles.require(id).await?;

        let users = CrudService::<entity::user::Entity>::new(self.db)
            .find_where(entity::user::Column::RoleId.eq(id))
            .await?;

        MemberService::new(self.db).with_profiles(users).await
    }

    /// Looks up an active role by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<role::Model>, AppError> {
        self.roles
            .find_one_where(role::Column::Name.eq(name))
            .await
    }

    /// Role given to new accounts that do not ask for one.
    pub async fn default_role(&self) -> Result<role::Model, AppError> {
        self.find_by_name(MEMBER_ROLE).await?.ok_or_else(|| {
            AppError::InternalError(format!("Default role {} is missing", MEMBER_ROLE))
        })
    }
}
