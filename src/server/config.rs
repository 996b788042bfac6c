use std::net::SocketAddr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_NAME: &str = "Motoclub";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_APP_URL: &str = "http://localhost:8000";
const DEFAULT_MAIL_PORT: u16 = 587;
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// SMTP settings, present only when `MAIL_SERVER` is set.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub server: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub from_name: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_version: String,
    pub debug: bool,
    pub bind_address: SocketAddr,
    pub app_url: Url,
    /// `None` allows any origin.
    pub allow_origins: Option<Vec<String>>,

    pub database_url: String,
    /// HS256 key for every token the server issues.
    pub secret_key: String,

    pub mail: Option<MailConfig>,

    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `DATABASE_URL` and `SECRET_KEY` are required, every other variable has a default.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration ready for startup
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required =
            |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));
        let invalid = |key: &str, reason: String| ConfigError::InvalidEnvVar(key.to_string(), reason);

        let debug = match var("APP_DEBUG") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                invalid("APP_DEBUG", format!("expected true or false, got {}", value))
            })?,
            None => false,
        };

        let bind_address = var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDRESS", e.to_string()))?;

        let app_url = Url::parse(&var("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()))
            .map_err(|e| invalid("APP_URL", e.to_string()))?;

        let allow_origins = var("ALLOW_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.iter().any(|origin| origin == "*"));

        let mail = match var("MAIL_SERVER") {
            Some(server) => {
                let port = match var("MAIL_PORT") {
                    Some(port) => port
                        .parse::<u16>()
                        .map_err(|e| invalid("MAIL_PORT", e.to_string()))?,
                    None => DEFAULT_MAIL_PORT,
                };
                let from = required("MAIL_FROM")?;

                Some(MailConfig {
                    server,
                    port,
                    username: var("MAIL_USERNAME"),
                    password: var("MAIL_PASSWORD"),
                    from_name: var("MAIL_FROM_NAME").unwrap_or_else(|| {
                        var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
                    }),
                    from,
                })
            }
            None => None,
        };

        Ok(Self {
            app_name: var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            app_version: var("APP_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            debug,
            bind_address,
            app_url,
            allow_origins,
            database_url: required("DATABASE_URL")?,
            secret_key: required("SECRET_KEY")?,
            mail,
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
        })
    }

    /// Absolute link to a path of this server, e.g. `/confirm-email/<token>`.
    pub fn link(&self, path: &str) -> String {
        match self.app_url.join(path) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.app_url, path),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [("DATABASE_URL", "sqlite::memory:"), ("SECRET_KEY", "secret")];

    #[test]
    fn applies_defaults() {
        let config = config(&REQUIRED).unwrap();

        assert_eq!(config.app_name, "Motoclub");
        assert!(!config.debug);
        assert_eq!(config.bind_address.port(), 8000);
        assert!(config.allow_origins.is_none());
        assert!(config.mail.is_none());
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn missing_secret_key_is_reported() {
        let result = config(&[("DATABASE_URL", "sqlite::memory:")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref key))) if key == "SECRET_KEY"
        ));
    }

    #[test]
    fn rejects_invalid_app_url() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("APP_URL", "not a url"));

        assert!(matches!(
            config(&vars),
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar(_, _)))
        ));
    }

    #[test]
    fn parses_origin_list() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("ALLOW_ORIGINS", "http://a.test, http://b.test"));

        let config = config(&vars).unwrap();
        assert_eq!(
            config.allow_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
    }

    #[test]
    fn builds_links_from_app_url() {
        let config = config(&REQUIRED).unwrap();

        assert_eq!(
            config.link("/confirm-email/abc"),
            "http://localhost:8000/confirm-email/abc"
        );
    }
}
