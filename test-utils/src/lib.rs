//! Motoclub Test Utils
//!
//! Shared testing utilities for the motoclub server. Tests get an isolated in-memory SQLite
//! database whose schema is generated straight from the SeaORM entities, plus factories
//! that insert rows with sensible defaults and fixtures that build unsaved models.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_teams() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_member_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let location = factory::create_location(db).await?;
//!     let team = factory::create_team(db, location.id).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
