use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{DeleteParamsDto, ErrorDto, ListParamsDto, PaginatedDto},
        motorcycle::{
            BrandDto, CreateBrandDto, CreateMotorcycleDto, MotorcycleDto, UpdateBrandDto,
            UpdateMotorcycleDto,
        },
        user::UserDto,
    },
    server::{
        error::AppError,
        model::{
            motorcycle::{
                CreateBrandParams, CreateMotorcycleParams, UpdateBrandParams,
                UpdateMotorcycleParams,
            },
            pagination::ListQuery,
        },
        service::motorcycle::{BrandService, MotorcycleService},
        state::AppState,
    },
};

/// Tag for grouping brand endpoints in OpenAPI documentation
pub static BRAND_TAG: &str = "brands";

/// Tag for grouping motorcycle endpoints in OpenAPI documentation
pub static MOTORCYCLE_TAG: &str = "motorcycles";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_brands, create_brand))
        .routes(routes!(get_brand, update_brand, delete_brand))
        .routes(routes!(get_brand_motorcycles))
        .routes(routes!(list_motorcycles, create_motorcycle))
        .routes(routes!(get_motorcycle, update_motorcycle, delete_motorcycle))
        .routes(routes!(get_motorcycle_brand))
        .routes(routes!(get_motorcycle_owner))
}

#[utoipa::path(
    get,
    path = "/brands",
    tag = BRAND_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of brands", body = PaginatedDto<BrandDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_brands(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let brands = BrandService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(brands.into_dto::<BrandDto>())))
}

#[utoipa::path(
    post,
    path = "/brands",
    tag = BRAND_TAG,
    request_body = CreateBrandDto,
    responses(
        (status = 201, description = "Brand created", body = BrandDto),
        (status = 400, description = "Invalid brand data", body = ErrorDto),
        (status = 409, description = "Brand name already exists", body = ErrorDto)
    ),
)]
pub async fn create_brand(
    State(state): State<AppState>,
    Json(payload): Json<CreateBrandDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateBrandParams::from_dto(payload)?;
    let brand = BrandService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(BrandDto::from(brand))))
}

#[utoipa::path(
    get,
    path = "/brands/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "The brand", body = BrandDto),
        (status = 404, description = "Brand not found", body = ErrorDto)
    ),
)]
pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let brand = BrandService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(BrandDto::from(brand))))
}

#[utoipa::path(
    put,
    path = "/brands/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand id")),
    request_body = UpdateBrandDto,
    responses(
        (status = 200, description = "Brand updated", body = BrandDto),
        (status = 400, description = "Invalid brand data", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 409, description = "Brand name already exists", body = ErrorDto)
    ),
)]
pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBrandDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateBrandParams::from_dto(payload)?;
    let brand = BrandService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(BrandDto::from(brand))))
}

#[utoipa::path(
    delete,
    path = "/brands/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Brand deleted"),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 409, description = "Brand is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    BrandService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/brands/{id}/motorcycles",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Motorcycles of the brand", body = Vec<MotorcycleDto>),
        (status = 404, description = "Brand not found", body = ErrorDto)
    ),
)]
pub async fn get_brand_motorcycles(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let motorcycles = BrandService::new(&state.db).motorcycles(id).await?;
    let motorcycles_dto: Vec<MotorcycleDto> = motorcycles.into_iter().map(MotorcycleDto::from).collect();

    Ok((StatusCode::OK, Json(motorcycles_dto)))
}

#[utoipa::path(
    get,
    path = "/motorcycles",
    tag = MOTORCYCLE_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of motorcycles", body = PaginatedDto<MotorcycleDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_motorcycles(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let motorcycles = MotorcycleService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(motorcycles.into_dto::<MotorcycleDto>())))
}

/// Register a member's motorcycle.
///
/// `owner_id` is the user id of the owner. The license plate is stored uppercased.
#[utoipa::path(
    post,
    path = "/motorcycles",
    tag = MOTORCYCLE_TAG,
    request_body = CreateMotorcycleDto,
    responses(
        (status = 201, description = "Motorcycle created", body = MotorcycleDto),
        (status = 400, description = "Invalid motorcycle data", body = ErrorDto),
        (status = 404, description = "Brand or owner not found", body = ErrorDto),
        (status = 409, description = "License plate already registered", body = ErrorDto)
    ),
)]
pub async fn create_motorcycle(
    State(state): State<AppState>,
    Json(payload): Json<CreateMotorcycleDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateMotorcycleParams::from_dto(payload)?;
    let motorcycle = MotorcycleService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(MotorcycleDto::from(motorcycle))))
}

#[utoipa::path(
    get,
    path = "/motorcycles/{id}",
    tag = MOTORCYCLE_TAG,
    params(("id" = i32, Path, description = "Motorcycle id")),
    responses(
        (status = 200, description = "The motorcycle", body = MotorcycleDto),
        (status = 404, description = "Motorcycle not found", body = ErrorDto)
    ),
)]
pub async fn get_motorcycle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let motorcycle = MotorcycleService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(MotorcycleDto::from(motorcycle))))
}

#[utoipa::path(
    put,
    path = "/motorcycles/{id}",
    tag = MOTORCYCLE_TAG,
    params(("id" = i32, Path, description = "Motorcycle id")),
    request_body = UpdateMotorcycleDto,
    responses(
        (status = 200, description = "Motorcycle updated", body = MotorcycleDto),
        (status = 400, description = "Invalid motorcycle data", body = ErrorDto),
        (status = 404, description = "Motorcycle not found", body = ErrorDto),
        (status = 409, description = "License plate already registered", body = ErrorDto)
    ),
)]
pub async fn update_motorcycle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMotorcycleDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateMotorcycleParams::from_dto(payload)?;
    let motorcycle = MotorcycleService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(MotorcycleDto::from(motorcycle))))
}

#[utoipa::path(
    delete,
    path = "/motorcycles/{id}",
    tag = MOTORCYCLE_TAG,
    params(("id" = i32, Path, description = "Motorcycle id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Motorcycle deleted"),
        (status = 404, description = "Motorcycle not found", body = ErrorDto),
        (status = 409, description = "Motorcycle is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_motorcycle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    MotorcycleService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/motorcycles/{id}/brand",
    tag = MOTORCYCLE_TAG,
    params(("id" = i32, Path, description = "Motorcycle id")),
    responses(
        (status = 200, description = "Brand of the motorcycle", body = BrandDto),
        (status = 404, description = "Motorcycle not found", body = ErrorDto)
    ),
)]
pub async fn get_motorcycle_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let brand = MotorcycleService::new(&state.db).brand(id).await?;

    Ok((StatusCode::OK, Json(BrandDto::from(brand))))
}

#[utoipa::path(
    get,
    path = "/motorcycles/{id}/owner",
    tag = MOTORCYCLE_TAG,
    params(("id" = i32, Path, description = "Motorcycle id")),
    responses(
        (status = 200, description = "Owner with profile", body = UserDto),
        (status = 404, description = "Motorcycle not found", body = ErrorDto)
    ),
)]
pub async fn get_motorcycle_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = MotorcycleService::new(&state.db).owner(id).await?;

    Ok((StatusCode::OK, Json(owner)))
}
