use entity::team;
use sea_orm::{ColumnTrait, DatabaseConnection};

use crate::{
    model::user::UserDto,
    server::{
        error::AppError,
        model::{
            pagination::{ListQuery, Paginated},
            team::{CreateTeamParams, UpdateTeamParams},
        },
        service::{crud::CrudService, member::MemberService},
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
    teams: CrudService<'a, team::Entity>,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            teams: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<team::Model>, AppError> {
        self.teams.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<team::Model, AppError> {
        self.teams.get(id).await
    }

    pub async fn create(&self, params: CreateTeamParams) -> Result<team::Model, AppError> {
        CrudService::<entity::location::Entity>::new(self.db)
            .require(params.location_id)
            .await?;

        let name = params.name.clone();
        self.teams
            .create_unique(params.into_active_model(), &name)
            .await
    }

    pub async fn update(&self, id: i32, params: UpdateTeamParams) -> Result<team::Model, AppError> {
        self.teams.require(id).await?;
        CrudService::<entity::location::Entity>::new(self.db)
            .require_opt(params.location_id)
            .await?;

        let name = params.name.clone();
        self.teams.update_unique(id, params, name.as_deref()).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.teams.delete(id, hard).await
    }

    pub async fn location(&self, id: i32) -> Result<entity::location::Model, AppError> {
        let team = self.teams.get(id).await?;

        CrudService::<entity::location::Entity>::new(self.db)
            .get(team.location_id)
            .await
    }

    /// Accounts whose profile belongs to the team.
    pub async fn members(&self, id: i32) -> Result<Vec<UserDto>, AppError> {
        self.teams.require(id).await?;

        let profiles = CrudService::<entity::profile::Entity>::new(self.db)
            .find_where(entity::profile::Column::TeamId.eq(id))
            .await?;

        MemberService::new(self.db).users_of_profiles(profiles).await
    }

    pub async fn events(&self, id: i32) -> Result<Vec<entity::event::Model>, AppError> {
        self.teams.require(id).await?;

        CrudService::<entity::event::Entity>::new(self.db)
            .find_where(entity::event::Column::TeamId.eq(id))
            .await
    }

    /// Agreements linked to the team through the agreement/team pivot.
    pub async fn agreements(&self, id: i32) -> Result<Vec<entity::agreement::Model>, AppError> {
        self.teams.require(id).await?;

        let agreement_ids: Vec<i32> = CrudService::<entity::agreement_team::Entity>::new(self.db)
            .find_where(entity::agreement_team::Column::TeamId.eq(id))
            .await?
            .into_iter()
            .map(|link| link.agreement_id)
            .collect();

        CrudService::<entity::agreement::Entity>::new(self.db)
            .find_where(entity::agreement::Column::Id.is_in(agreement_ids))
            .await
    }
}
