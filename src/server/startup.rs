use std::time::Duration;

use crate::server::{config::Config, error::AppError, service::email::EmailService};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema, including the seeded roles, is up to date
/// before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(config.debug);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for outgoing API calls.
///
/// Redirects are disabled and every request is bounded by a timeout.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(30))
        .build()?;

    Ok(client)
}

/// Builds the mail service, falling back to log-only delivery without `MAIL_SERVER`.
pub fn setup_email_service(config: &Config) -> Result<EmailService, AppError> {
    let service = EmailService::new(config.mail.as_ref(), &config.app_name)?;

    if config.mail.is_none() {
        tracing::warn!("MAIL_SERVER not set, outgoing e-mails will only be logged");
    }

    Ok(service)
}
