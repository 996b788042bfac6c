use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::LocationType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "ciudad")]
    pub kind: LocationType,
    pub is_capital: bool,
    pub department_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLocationDto {
    pub name: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "ciudad")]
    pub kind: LocationType,
    #[serde(default)]
    pub is_capital: bool,
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateLocationDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<LocationType>,
    pub is_capital: Option<bool>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<i32>)]
    pub department_id: Option<Option<i32>>,
}
