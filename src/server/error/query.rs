use thiserror::Error;

/// Rejected filter or sort clause.
///
/// Raised while the select statement is being built, so nothing reaches the database.
/// Always results in 400 Bad Request carrying the message below.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid filter field: {0}")]
    InvalidFilterField(String),

    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),

    /// The value cannot be converted to the column's type.
    #[error("Invalid value for filter field: {0}")]
    InvalidFilterValue(String),
}
