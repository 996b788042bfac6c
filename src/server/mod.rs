//! Club management backend.
//!
//! The server exposes the club's members, teams, events, agreements, posts and feedback
//! over a JSON REST API. It is built on Axum for HTTP, SeaORM for persistence and
//! utoipa for the OpenAPI description of every endpoint.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as membership checks and transactions
//! - **Data Layer** (`data/`) - Generic soft-delete repository and list query translation
//! - **Model Layer** (`model/`) - Validated params and entity-to-DTO conversions
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, HTTP client, tokens, mail)
//! - **Startup** (`startup`) - Database connection, migrations and client setup
//! - **Router** (`router`) - Route assembly, CORS, request logging and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller handler
//! 2. **Controller** runs the auth guard when the route is protected, then validates the
//!    payload into params
//! 3. **Service** checks referenced rows exist and applies the business rules
//! 4. **Data** builds the filtered, sorted and paginated query and executes it
//! 5. **Controller** converts the resulting models into DTOs for the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
