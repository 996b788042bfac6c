//! Data transfer objects exchanged over the HTTP API.
//!
//! These types only describe the JSON wire format. Validation and conversion into
//! persistence models happen in `server::model`.

pub mod agreement;
pub mod api;
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
