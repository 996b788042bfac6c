use sea_orm_migration::{prelude::*, schema::*};

/// Columns present on every table.
#[derive(DeriveIden)]
pub enum Bookkeeping {
    Deleted,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

/// Appends the soft-delete flag and the audit timestamps to a table definition.
pub fn bookkeeping(table: &mut TableCreateStatement) -> &mut TableCreateStatement {
    table
        .col(boolean(Bookkeeping::Deleted).default(false))
        .col(timestamp_with_time_zone_null(Bookkeeping::DeletedAt))
        .col(timestamp_with_time_zone(Bookkeeping::CreatedAt).default(Expr::current_timestamp()))
        .col(timestamp_with_time_zone(Bookkeeping::UpdatedAt).default(Expr::current_timestamp()))
}
