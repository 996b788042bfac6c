use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyDto {
    pub id: i32,
    pub name: String,
    pub contact_name: String,
    pub contact_telephone: String,
    pub contact_address: Option<String>,
    pub location_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCompanyDto {
    pub name: String,
    pub contact_name: String,
    pub contact_telephone: String,
    pub contact_address: Option<String>,
    pub location_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCompanyDto {
    pub name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_telephone: Option<String>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<String>)]
    pub contact_address: Option<Option<String>>,
    pub location_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AgreementDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
    pub company_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAgreementDto {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: Option<bool>,
    pub company_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAgreementDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::server::util::serde::nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: Option<bool>,
    pub company_id: Option<i32>,
}
