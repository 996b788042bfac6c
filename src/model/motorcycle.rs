use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandDto {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBrandDto {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBrandDto {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MotorcycleDto {
    pub id: i32,
    pub model: String,
    pub license_plate: String,
    pub photo: Option<String>,
    pub brand_id: i32,
    /// Profile id of the owner
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMotorcycleDto {
    pub model: String,
    pub license_plate: String,
    pub photo: Option<String>,
    pub brand_id: i32,
    /// User id of the owner
    pub owner_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMotorcycleDto {
    pub model: Option<String>,
    pub license_plate: Option<String>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<String>)]
    pub photo: Option<Option<String>>,
    pub brand_id: Option<i32>,
}
