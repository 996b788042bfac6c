//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the data layer. They resolve the user ids
//! carried by payloads to member profiles, check that referenced records exist, enforce
//! the cross-record rules of each family (date ranges, team membership, attendance
//! before review...) and turn database errors into structured [`AppError`]s.
//!
//! Most families are thin wrappers around [`crud::CrudService`]; the auth, mail, token
//! and chatbot services integrate the external collaborators.
//!
//! [`AppError`]: crate::server::error::AppError

pub mod agreement;
pub mod auth;
pub mod chatbot;
pub mod crud;
pub mod email;
pub mod event;
pub mod feedback;
pub mod location;
pub mod member;
pub mod motorcycle;
pub mod path;
pub mod post;
pub mod role;
pub mod team;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
