//! Application state shared across all request handlers.
//!
//! The state is built once in `main` and cloned into every handler through Axum's state
//! extraction. Every field is cheap to clone: the connection is a pool, the HTTP and SMTP
//! clients are reference counted internally and the configuration sits behind an `Arc`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    service::{email::EmailService, token::TokenService},
};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the club database.
    pub db: DatabaseConnection,

    /// Configuration loaded from the environment at startup.
    pub config: Arc<Config>,

    /// HTTP client for the chatbot backend.
    ///
    /// Built without redirects so calls cannot be bounced to another host.
    pub http_client: reqwest::Client,

    /// Issues and verifies the JWTs used for login and the e-mail flows.
    pub tokens: TokenService,

    /// Outgoing mail, or a logging stand-in when no SMTP server is configured.
    pub email: EmailService,
}

impl AppState {
    /// Creates the application state from its already initialized parts.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Loaded configuration, its secret key signs the tokens
    /// - `http_client` - HTTP client for external API requests
    /// - `email` - Mail service
    pub fn new(
        db: DatabaseConnection,
        config: Config,
        http_client: reqwest::Client,
        email: EmailService,
    ) -> Self {
        let tokens = TokenService::new(&config.secret_key);

        Self {
            db,
            config: Arc::new(config),
            http_client,
            tokens,
            email,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State over a test database with mail disabled and no Gemini key.
    pub fn for_test(db: DatabaseConnection) -> Self {
        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            "SECRET_KEY" => Some("test-secret-key".to_string()),
            _ => None,
        })
        .expect("test configuration is valid");
        let email = EmailService::disabled(&config.app_name);

        Self::new(db, config, reqwest::Client::new(), email)
    }
}
