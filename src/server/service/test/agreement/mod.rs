use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::agreement::AgreementService};

mod teams;

/// Creates an agreement and a team in the same location.
async fn agreement_and_team(
    db: &DatabaseConnection,
) -> Result<(entity::agreement::Model, entity::team::Model), AppError> {
    let location = factory::create_location(db).await?;
    let company = factory::create_company(db, location.id).await?;
    let agreement = factory::create_agreement(db, company.id).await?;
    let team = factory::create_team(db, location.id).await?;

    Ok((agreement, team))
}
