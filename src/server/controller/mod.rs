//! HTTP handlers, one module per entity family.
//!
//! Each module exposes a `routes()` function returning an `OpenApiRouter` with its paths
//! and their OpenAPI documentation. Handlers convert request DTOs into params, call the
//! matching service and turn the result back into response DTOs.

pub mod agreement;
pub mod auth;
pub mod chat;
pub mod comment;
pub mod event;
pub mod feedback;
pub mod location;
pub mod motorcycle;
pub mod path;
pub mod post;
pub mod role;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
