//! Database access layer.
//!
//! [`soft_delete::SoftDeleteRepository`] implements create, lookup, paginated listing,
//! partial update and soft/hard delete once for every entity implementing
//! [`entity::soft_delete::SoftDelete`]. [`query`] turns the parsed `filter` and `sort`
//! query-string clauses into SeaORM conditions checked against the entity's columns.

pub mod query;
pub mod soft_delete;

#[cfg(test)]
mod test;
