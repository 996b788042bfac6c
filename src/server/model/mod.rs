//! Server-side parameter types and conversions.
//!
//! Request DTOs are validated into `Create*Params` / `Update*Params` structs before any
//! database access. Create params turn into SeaORM active models, update params apply
//! only their `Some` fields through the [`Changes`](crate::server::data::soft_delete::Changes)
//! trait. Entity models are converted to response DTOs with `From` implementations
//! living next to the params of their family.

pub mod agreement;
pub mod comment;
pub mod event;
pub mod feedback;
pub mod location;
pub mod motorcycle;
pub mod pagination;
pub mod path;
pub mod post;
pub mod role;
pub mod team;
pub mod user;
