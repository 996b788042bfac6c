use sea_orm::EntityTrait;

/// Bookkeeping columns shared by every table.
///
/// Rows are never filtered out by the database itself; callers combine
/// `deleted_column().eq(false)` with their own conditions. Implemented through the
/// `soft_delete!` macro in each entity module.
pub trait SoftDelete: EntityTrait {
    /// Human readable entity name used in error messages, e.g. `Agreement`.
    const LABEL: &'static str;

    fn id_column() -> Self::Column;

    fn deleted_column() -> Self::Column;

    fn deleted_at_column() -> Self::Column;

    fn created_at_column() -> Self::Column;

    fn updated_at_column() -> Self::Column;

    /// Column names that must not be reachable from filter or sort clauses.
    fn hidden_columns() -> &'static [&'static str] {
        &[]
    }
}
