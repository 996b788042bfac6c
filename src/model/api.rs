use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Query parameters accepted by every paginated list endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParamsDto {
    /// Number of records to skip (default: 0)
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of records to return, 0 for no limit (default: 100)
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Comma separated `field=asc|desc` clauses
    pub sort: Option<String>,
    /// Comma separated `field=value` clauses, a bare `field` matches non-null values
    pub filter: Option<String>,
}

fn default_limit() -> u64 {
    100
}

impl Default for ListParamsDto {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            sort: None,
            filter: None,
        }
    }
}

/// `?hard=` flag of delete endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteParamsDto {
    /// Physically remove the record instead of marking it deleted (default: false)
    #[serde(default)]
    pub hard: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    pub total_records: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

/// Envelope returned by every paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDto<T> {
    pub data: Vec<T>,
    pub pagination: PaginationDto,
}

/// Body of endpoints that link an existing record by id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IdDto {
    pub id: i32,
}
