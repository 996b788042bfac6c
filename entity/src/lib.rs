//! SeaORM entities for the motoclub database.
//!
//! Every table shares the same bookkeeping columns (`id`, `deleted`, `deleted_at`,
//! `created_at`, `updated_at`). The [`soft_delete::SoftDelete`] trait exposes those columns
//! to generic repository code so that create, list, update and delete are written once.

pub mod soft_delete;

/// Implements [`soft_delete::SoftDelete`] for the `Entity` of the module it is invoked in.
///
/// The optional second argument lists columns that must never be exposed to
/// caller-supplied filter or sort clauses.
macro_rules! soft_delete {
    ($label:literal) => {
        soft_delete!($label, []);
    };
    ($label:literal, [$($hidden:literal),*]) => {
        impl $crate::soft_delete::SoftDelete for Entity {
            const LABEL: &'static str = $label;

            fn id_column() -> Column {
                Column::Id
            }

            fn deleted_column() -> Column {
                Column::Deleted
            }

            fn deleted_at_column() -> Column {
                Column::DeletedAt
            }

            fn created_at_column() -> Column {
                Column::CreatedAt
            }

            fn updated_at_column() -> Column {
                Column::UpdatedAt
            }

            fn hidden_columns() -> &'static [&'static str] {
                &[$($hidden),*]
            }
        }
    };
}

pub mod agreement;
pub mod agreement_team;
pub mod brand;
pub mod comment;
pub mod comment_reaction;
pub mod company;
pub mod event;
pub mod feedback;
pub mod feedback_answer;
pub mod location;
pub mod motorcycle;
pub mod participation;
pub mod path;
pub mod post;
pub mod post_tag;
pub mod prelude;
pub mod profile;
pub mod review;
pub mod role;
pub mod sea_orm_active_enums;
pub mod tag;
pub mod team;
pub mod user;
