//! Translation of parsed filter and sort clauses into SeaORM conditions.
//!
//! Field names are resolved against the entity's columns. Unknown and hidden fields are
//! rejected before the statement is returned, so an invalid clause never reaches the
//! database.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use entity::soft_delete::SoftDelete;
use sea_orm::{
    sea_query::{ColumnType, Order},
    ColumnTrait, EntityTrait, IdenStatic, Iterable, QueryFilter, QueryOrder, Select, Value,
};

use crate::server::{
    error::query::QueryError,
    util::query::{FilterSpec, FilterValue, SortDirection, SortSpec},
};

/// Adds one condition per filter clause, combined conjunctively in clause order.
///
/// # Returns
/// - `Ok(Select<E>)` - Statement with every condition applied
/// - `Err(QueryError::InvalidFilterField)` - First clause naming an unknown or hidden column
/// - `Err(QueryError::InvalidFilterValue)` - Value cannot be converted to the column type
pub fn apply_filters<E: SoftDelete>(
    mut select: Select<E>,
    filters: &FilterSpec,
) -> Result<Select<E>, QueryError> {
    for (field, value) in filters.iter() {
        let column = column::<E>(field)
            .ok_or_else(|| QueryError::InvalidFilterField(field.to_string()))?;

        select = match value {
            FilterValue::Exists => select.filter(column.is_not_null()),
            FilterValue::Bool(b) => {
                let value = coerce(column, field, &b.to_string())?;
                select.filter(column.eq(value))
            }
            FilterValue::Text(text) => {
                let value = coerce(column, field, text)?;
                select.filter(column.eq(value))
            }
        };
    }

    Ok(select)
}

/// Adds one `ORDER BY` term per sort clause, in clause order.
pub fn apply_sort<E: SoftDelete>(
    mut select: Select<E>,
    sort: &SortSpec,
) -> Result<Select<E>, QueryError> {
    for (field, direction) in sort.iter() {
        let column =
            column::<E>(field).ok_or_else(|| QueryError::InvalidSortField(field.to_string()))?;

        let order = match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };
        select = select.order_by(column, order);
    }

    Ok(select)
}

/// Resolves a database column name, skipping columns the entity hides.
fn column<E: SoftDelete>(field: &str) -> Option<E::Column> {
    if E::hidden_columns().contains(&field) {
        return None;
    }

    E::Column::iter().find(|c| c.as_str() == field)
}

/// Converts a raw clause value to the column's type.
fn coerce<C: ColumnTrait>(column: C, field: &str, raw: &str) -> Result<Value, QueryError> {
    let invalid = || QueryError::InvalidFilterValue(field.to_string());

    let value = match column.def().get_column_type() {
        ColumnType::TinyInteger | ColumnType::SmallInteger | ColumnType::Integer => {
            raw.parse::<i32>().map_err(|_| invalid())?.into()
        }
        ColumnType::BigInteger => raw.parse::<i64>().map_err(|_| invalid())?.into(),
        ColumnType::Float | ColumnType::Double => raw.parse::<f64>().map_err(|_| invalid())?.into(),
        ColumnType::Boolean => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => true.into(),
            "false" | "0" => false.into(),
            _ => return Err(invalid()),
        },
        ColumnType::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| invalid())?
            .into(),
        ColumnType::DateTime | ColumnType::Timestamp => parse_naive_datetime(raw)
            .ok_or_else(invalid)?
            .into(),
        ColumnType::TimestampWithTimeZone => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| parse_naive_datetime(raw).map(|dt| dt.and_utc()))
            .ok_or_else(invalid)?
            .into(),
        _ => raw.to_string().into(),
    };

    Ok(value)
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::util::query::{parse_filter, parse_sort};
    use sea_orm::{DbBackend, QueryTrait};

    fn sql(select: Select<entity::agreement::Entity>) -> String {
        select.build(DbBackend::Sqlite).to_string()
    }

    #[test]
    fn builds_conditions_for_known_columns() {
        let select = apply_filters(
            entity::agreement::Entity::find(),
            &parse_filter(Some("company_id=2,active=true,description")),
        )
        .unwrap();

        let sql = sql(select);
        assert!(sql.contains(r#""agreement"."company_id" = 2"#));
        assert!(sql.contains(r#""agreement"."active" ="#));
        assert!(sql.contains(r#""agreement"."description" IS NOT NULL"#));
    }

    #[test]
    fn rejects_unknown_filter_field() {
        let err = apply_filters(
            entity::company::Entity::find(),
            &parse_filter(Some("name=Acme,bogus_field=1")),
        )
        .unwrap_err();

        assert_eq!(err, QueryError::InvalidFilterField("bogus_field".to_string()));
        assert_eq!(err.to_string(), "Invalid filter field: bogus_field");
    }

    #[test]
    fn rejects_hidden_columns() {
        let filter = apply_filters(
            entity::user::Entity::find(),
            &parse_filter(Some("password=secret")),
        );
        let sort = apply_sort(entity::user::Entity::find(), &parse_sort(Some("password")));

        assert_eq!(
            filter.unwrap_err(),
            QueryError::InvalidFilterField("password".to_string())
        );
        assert_eq!(
            sort.unwrap_err(),
            QueryError::InvalidSortField("password".to_string())
        );
    }

    #[test]
    fn rejects_uncoercible_value() {
        let err = apply_filters(
            entity::agreement::Entity::find(),
            &parse_filter(Some("start_date=yesterday")),
        )
        .unwrap_err();

        assert_eq!(err, QueryError::InvalidFilterValue("start_date".to_string()));
    }

    #[test]
    fn orders_in_clause_order() {
        let select = apply_sort(
            entity::agreement::Entity::find(),
            &parse_sort(Some("start_date=desc,name")),
        )
        .unwrap();

        let sql = sql(select);
        assert!(sql.contains(
            r#"ORDER BY "agreement"."start_date" DESC, "agreement"."name" ASC"#
        ));
    }

    #[test]
    fn rejects_unknown_sort_field() {
        let err = apply_sort(
            entity::agreement::Entity::find(),
            &parse_sort(Some("bogus_field=desc")),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Invalid sort field: bogus_field");
    }
}
