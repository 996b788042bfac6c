//! Companies, agreements and the teams an agreement applies to.

use entity::{agreement, agreement_team, company};
use sea_orm::{ActiveValue, ColumnTrait, Condition, DatabaseConnection};

use crate::server::{
    error::AppError,
    model::{
        agreement::{
            CreateAgreementParams, CreateCompanyParams, UpdateAgreementParams,
            UpdateCompanyParams,
        },
        pagination::{ListQuery, Paginated},
    },
    service::crud::CrudService,
    util::validate,
};

pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
    companies: CrudService<'a, company::Entity>,
}

impl<'a> CompanyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            companies: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<company::Model>, AppError> {
        self.companies.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<company::Model, AppError> {
        self.companies.get(id).await
    }

    pub async fn create(&self, params: CreateCompanyParams) -> Result<company::Model, AppError> {
        CrudService::<entity::location::Entity>::new(self.db)
            .require(params.location_id)
            .await?;

        let name = params.name.clone();
        self.companies
            .create_unique(params.into_active_model(), &name)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCompanyParams,
    ) -> Result<company::Model, AppError> {
        self.companies.require(id).await?;
        CrudService::<entity::location::Entity>::new(self.db)
            .require_opt(params.location_id)
            .await?;

        let name = params.name.clone();
        self.companies
            .update_unique(id, params, name.as_deref())
            .await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.companies.delete(id, hard).await
    }

    pub async fn agreements(&self, id: i32) -> Result<Vec<agreement::Model>, AppError> {
        self.companies.require(id).await?;

        CrudService::<agreement::Entity>::new(self.db)
            .find_where(agreement::Column::CompanyId.eq(id))
            .await
    }
}

pub struct AgreementService<'a> {
    db: &'a DatabaseConnection,
    agreements: CrudService<'a, agreement::Entity>,
    links: CrudService<'a, agreement_team::Entity>,
}

impl<'a> AgreementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            agreements: CrudService::new(db),
            links: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<agreement::Model>, AppError> {
        self.agreements.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<agreement::Model, AppError> {
        self.agreements.get(id).await
    }

    pub async fn create(
        &self,
        params: CreateAgreementParams,
    ) -> Result<agreement::Model, AppError> {
        CrudService::<company::Entity>::new(self.db)
            .require(params.company_id)
            .await?;

        let name = params.name.clone();
        let agreement = self
            .agreements
            .create_unique(params.into_active_model(), &name)
            .await?;

        tracing::info!(
            "Created agreement {} (#{}) for company #{}",
            agreement.name,
            agreement.id,
            agreement.company_id
        );

        Ok(agreement)
    }

    /// Applies a partial update.
    ///
    /// The date range is checked against the stored value of whichever end is not
    /// part of the update.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateAgreementParams,
    ) -> Result<agreement::Model, AppError> {
        let current = self.agreements.get(id).await?;
        CrudService::<company::Entity>::new(self.db)
            .require_opt(params.company_id)
            .await?;

        if params.start_date.is_some() || params.end_date.is_some() {
            validate::date_range(
                &params.start_date.unwrap_or(current.start_date),
                &params.end_date.unwrap_or(current.end_date),
            )?;
        }

        let name = params.name.clone();
        self.agreements
            .update_unique(id, params, name.as_deref())
            .await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.agreements.delete(id, hard).await
    }

    pub async fn company(&self, id: i32) -> Result<company::Model, AppError> {
        let agreement = self.agreements.get(id).await?;

        CrudService::<company::Entity>::new(self.db)
            .get(agreement.company_id)
            .await
    }

    pub async fn teams(&self, id: i32) -> Result<Vec<entity::team::Model>, AppError> {
        self.agreements.require(id).await?;

        let team_ids: Vec<i32> = self
            .links
            .find_where(agreement_team::Column::AgreementId.eq(id))
            .await?
            .into_iter()
            .map(|link| link.team_id)
            .collect();

        CrudService::<entity::team::Entity>::new(self.db)
            .find_where(entity::team::Column::Id.is_in(team_ids))
            .await
    }

    /// Links a team to the agreement and returns every linked team.
    ///
    /// # Returns
    /// - `Ok(Vec<team::Model>)` - Teams of the agreement after the link
    /// - `Err(AppError::NotFound)` - Unknown agreement or team
    /// - `Err(AppError::BadRequest)` - The team is already linked
    pub async fn add_team(
        &self,
        id: i32,
        team_id: i32,
    ) -> Result<Vec<entity::team::Model>, AppError> {
        self.agreements.require(id).await?;
        CrudService::<entity::team::Entity>::new(self.db)
            .require(team_id)
            .await?;

        if self.link(id, team_id).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Team #{} is already part of the agreement #{}!",
                team_id, id
            )));
        }

        self.links
            .create(agreement_team::ActiveModel {
                agreement_id: ActiveValue::Set(id),
                team_id: ActiveValue::Set(team_id),
                ..Default::default()
            })
            .await?;

        self.teams(id).await
    }

    /// Unlinks a team. The pivot row is removed so the pair can be linked again.
    pub async fn remove_team(&self, id: i32, team_id: i32) -> Result<(), AppError> {
        self.agreements.require(id).await?;
        CrudService::<entity::team::Entity>::new(self.db)
            .require(team_id)
            .await?;

        let Some(link) = self.link(id, team_id).await? else {
            return Err(AppError::NotFound(format!(
                "Team #{} not found in agreement #{}!",
                team_id, id
            )));
        };

        self.links.delete(link.id, true).await
    }

    async fn link(
        &self,
        id: i32,
        team_id: i32,
    ) -> Result<Option<agreement_team::Model>, AppError> {
        self.links
            .find_one_where(
                Condition::all()
                    .add(agreement_team::Column::AgreementId.eq(id))
                    .add(agreement_team::Column::TeamId.eq(team_id)),
            )
            .await
    }
}
