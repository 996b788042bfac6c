use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        agreement::{
            AgreementDto, CompanyDto, CreateAgreementDto, CreateCompanyDto, UpdateAgreementDto,
            UpdateCompanyDto,
        },
        api::{DeleteParamsDto, ErrorDto, IdDto, ListParamsDto, PaginatedDto},
        team::TeamDto,
    },
    server::{
        error::AppError,
        model::{
            agreement::{
                CreateAgreementParams, CreateCompanyParams, UpdateAgreementParams,
                UpdateCompanyParams,
            },
            pagination::ListQuery,
        },
        service::agreement::{AgreementService, CompanyService},
        state::AppState,
    },
};

/// Tag for grouping company endpoints in OpenAPI documentation
pub static COMPANY_TAG: &str = "companies";

/// Tag for grouping agreement endpoints in OpenAPI documentation
pub static AGREEMENT_TAG: &str = "agreements";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_companies, create_company))
        .routes(routes!(get_company, update_company, delete_company))
        .routes(routes!(get_company_agreements))
        .routes(routes!(list_agreements, create_agreement))
        .routes(routes!(get_agreement, update_agreement, delete_agreement))
        .routes(routes!(get_agreement_company))
        .routes(routes!(get_agreement_teams, add_agreement_team))
        .routes(routes!(remove_agreement_team))
}

#[utoipa::path(
    get,
    path = "/companies",
    tag = COMPANY_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of companies", body = PaginatedDto<CompanyDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let companies = CompanyService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(companies.into_dto::<CompanyDto>())))
}

#[utoipa::path(
    post,
    path = "/companies",
    tag = COMPANY_TAG,
    request_body = CreateCompanyDto,
    responses(
        (status = 201, description = "Company created", body = CompanyDto),
        (status = 400, description = "Invalid company data", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 409, description = "Company name already exists", body = ErrorDto)
    ),
)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompanyDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCompanyParams::from_dto(payload)?;
    let company = CompanyService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(CompanyDto::from(company))))
}

#[utoipa::path(
    get,
    path = "/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "The company", body = CompanyDto),
        (status = 404, description = "Company not found", body = ErrorDto)
    ),
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(CompanyDto::from(company))))
}

#[utoipa::path(
    put,
    path = "/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company id")),
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Company updated", body = CompanyDto),
        (status = 400, description = "Invalid company data", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 409, description = "Company name already exists", body = ErrorDto)
    ),
)]
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCompanyDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateCompanyParams::from_dto(payload)?;
    let company = CompanyService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(CompanyDto::from(company))))
}

#[utoipa::path(
    delete,
    path = "/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 409, description = "Company is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    CompanyService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/companies/{id}/agreements",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Agreements signed with the company", body = Vec<AgreementDto>),
        (status = 404, description = "Company not found", body = ErrorDto)
    ),
)]
pub async fn get_company_agreements(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let agreements = CompanyService::new(&state.db).agreements(id).await?;
    let agreements_dto: Vec<AgreementDto> = agreements.into_iter().map(AgreementDto::from).collect();

    Ok((StatusCode::OK, Json(agreements_dto)))
}

#[utoipa::path(
    get,
    path = "/agreements",
    tag = AGREEMENT_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of agreements", body = PaginatedDto<AgreementDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_agreements(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let agreements = AgreementService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(agreements.into_dto::<AgreementDto>())))
}

/// Create a commercial agreement with a company.
///
/// # Returns
/// - `201 Created` - The new agreement
/// - `400 Bad Request` - Invalid data, or `start_date` after `end_date`
/// - `404 Not Found` - Unknown company
/// - `409 Conflict` - An agreement with this name exists
#[utoipa::path(
    post,
    path = "/agreements",
    tag = AGREEMENT_TAG,
    request_body = CreateAgreementDto,
    responses(
        (status = 201, description = "Agreement created", body = AgreementDto),
        (status = 400, description = "Invalid agreement data", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 409, description = "Agreement name already exists", body = ErrorDto)
    ),
)]
pub async fn create_agreement(
    State(state): State<AppState>,
    Json(payload): Json<CreateAgreementDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateAgreementParams::from_dto(payload)?;
    let agreement = AgreementService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(AgreementDto::from(agreement))))
}

#[utoipa::path(
    get,
    path = "/agreements/{id}",
    tag = AGREEMENT_TAG,
    params(("id" = i32, Path, description = "Agreement id")),
    responses(
        (status = 200, description = "The agreement", body = AgreementDto),
        (status = 404, description = "Agreement not found", body = ErrorDto)
    ),
)]
pub async fn get_agreement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let agreement = AgreementService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(AgreementDto::from(agreement))))
}

/// Partially update an agreement.
///
/// A single date is checked against the stored value of the other one.
#[utoipa::path(
    put,
    path = "/agreements/{id}",
    tag = AGREEMENT_TAG,
    params(("id" = i32, Path, description = "Agreement id")),
    request_body = UpdateAgreementDto,
    responses(
        (status = 200, description = "Agreement updated", body = AgreementDto),
        (status = 400, description = "Invalid agreement data", body = ErrorDto),
        (status = 404, description = "Agreement not found", body = ErrorDto),
        (status = 409, description = "Agreement name already exists", body = ErrorDto)
    ),
)]
pub async fn update_agreement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAgreementDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateAgreementParams::from_dto(payload)?;
    let agreement = AgreementService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(AgreementDto::from(agreement))))
}

#[utoipa::path(
    delete,
    path = "/agreements/{id}",
    tag = AGREEMENT_TAG,
    params(("id" = i32, Path, description = "Agreement id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Agreement deleted"),
        (status = 404, description = "Agreement not found", body = ErrorDto),
        (status = 409, description = "Agreement is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_agreement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    AgreementService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/agreements/{id}/company",
    tag = AGREEMENT_TAG,
    params(("id" = i32, Path, description = "Agreement id")),
    responses(
        (status = 200, description = "Company of the agreement", body = CompanyDto),
        (status = 404, description = "Agreement not found", body = ErrorDto)
    ),
)]
pub async fn get_agreement_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let company = AgreementService::new(&state.db).company(id).await?;

    Ok((StatusCode::OK, Json(CompanyDto::from(company))))
}

#[utoipa::path(
    get,
    path = "/agreements/{id}/teams",
    tag = AGREEMENT_TAG,
    params(("id" = i32, Path, description = "Agreement id")),
    responses(
        (status = 200, description = "Teams taking part in the agreement", body = Vec<TeamDto>),
        (status = 404, description = "Agreement not found", body = ErrorDto)
    ),
)]
pub async fn get_agreement_teams(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teams = AgreementService::new(&state.db).teams(id).await?;
    let teams_dto: Vec<TeamDto> = teams.into_iter().map(TeamDto::from).collect();

    Ok((StatusCode::OK, Json(teams_dto)))
}

/// Link a team to an agreement.
///
/// # Returns
/// - `201 Created` - Teams of the agreement after the link
/// - `400 Bad Request` - The team is already part of the agreement
/// - `404 Not Found` - Unknown agreement or team
#[utoipa::path(
    post,
    path = "/agreements/{id}/teams",
    tag = AGREEMENT_TAG,
    params(("id" = i32, Path, description = "Agreement id")),
    request_body = IdDto,
    responses(
        (status = 201, description = "Team linked", body = Vec<TeamDto>),
        (status = 400, description = "Team already linked", body = ErrorDto),
        (status = 404, description = "Agreement or team not found", body = ErrorDto)
    ),
)]
pub async fn add_agreement_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<IdDto>,
) -> Result<impl IntoResponse, AppError> {
    let teams = AgreementService::new(&state.db)
        .add_team(id, payload.id)
        .await?;
    let teams_dto: Vec<TeamDto> = teams.into_iter().map(TeamDto::from).collect();

    Ok((StatusCode::CREATED, Json(teams_dto)))
}

/// Unlink a team from an agreement.
#[utoipa::path(
    delete,
    path = "/agreements/{id}/teams/{team_id}",
    tag = AGREEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Agreement id"),
        ("team_id" = i32, Path, description = "Team id")
    ),
    responses(
        (status = 204, description = "Team unlinked"),
        (status = 404, description = "Agreement or team not found, or not linked", body = ErrorDto)
    ),
)]
pub async fn remove_agreement_team(
    State(state): State<AppState>,
    Path((id, team_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AgreementService::new(&state.db)
        .remove_team(id, team_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
