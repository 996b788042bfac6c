//! Outgoing e-mail for account confirmation and password resets.
//!
//! Without SMTP settings messages are written to the log instead. Sends are spawned
//! so request handlers never wait on the mail server.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::MailConfig, error::AppError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone)]
struct Smtp {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

#[derive(Clone)]
pub struct EmailService {
    smtp: Option<Smtp>,
    app_name: String,
}

impl EmailService {
    /// Builds the SMTP transport, or a log-only service when `mail` is `None`.
    ///
    /// The connection is opened lazily on the first send.
    pub fn new(mail: Option<&MailConfig>, app_name: &str) -> Result<Self, AppError> {
        let smtp = match mail {
            Some(mail) => {
                let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&mail.server)
                    .map_err(|e| {
                        AppError::InternalError(format!("Failed to create SMTP transport: {}", e))
                    })?
                    .port(mail.port);

                if let (Some(user), Some(pass)) = (&mail.username, &mail.password) {
                    builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
                }

                let from = format!("{} <{}>", mail.from_name, mail.from)
                    .parse::<Mailbox>()
                    .map_err(|e| AppError::InternalError(format!("Invalid MAIL_FROM: {}", e)))?;

                Some(Smtp {
                    transport: builder.build(),
                    from,
                })
            }
            None => None,
        };

        Ok(Self {
            smtp,
            app_name: app_name.to_string(),
        })
    }

    /// Log-only service.
    pub fn disabled(app_name: &str) -> Self {
        Self {
            smtp: None,
            app_name: app_name.to_string(),
        }
    }

    pub fn confirmation(&self, to: &str, link: &str) -> Email {
        Email {
            to: to.to_string(),
            subject: format!("Confirm your {} account", self.app_name),
            body: format!(
                "Welcome to {}!\n\n\
                 Confirm your e-mail address by visiting the following link:\n\
                 {}\n\n\
                 This link will expire in 24 hours.",
                self.app_name, link
            ),
        }
    }

    pub fn password_reset(&self, to: &str, link: &str) -> Email {
        Email {
            to: to.to_string(),
            subject: format!("Password reset for {}", self.app_name),
            body: format!(
                "A password reset has been requested for your {} account.\n\n\
                 To choose a new password, visit the following link:\n\
                 {}\n\n\
                 If you did not request this, you can safely ignore this email.\n\n\
                 This link will expire in 1 hour.",
                self.app_name, link
            ),
        }
    }

    /// Sends `email` in a background task. Failures are logged, never returned.
    pub fn send_in_background(&self, email: Email) {
        let service = self.clone();

        tokio::spawn(async move {
            if let Err(e) = service.send(&email).await {
                tracing::error!("Failed to send e-mail to {}: {}", email.to, e);
            }
        });
    }

    pub async fn send(&self, email: &Email) -> Result<(), AppError> {
        let Some(smtp) = &self.smtp else {
            tracing::info!(
                "Mail server not configured; e-mail to {} with subject \"{}\":\n{}",
                email.to,
                email.subject,
                email.body
            );
            return Ok(());
        };

        let to = email
            .to
            .parse::<Mailbox>()
            .map_err(|e| AppError::BadRequest(format!("Invalid recipient address: {}", e)))?;

        let message = Message::builder()
            .from(smtp.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| AppError::InternalError(format!("Failed to build e-mail: {}", e)))?;

        smtp.transport
            .send(message)
            .await
            .map_err(|e| AppError::InternalError(format!("SMTP error: {}", e)))?;

        tracing::debug!("E-mail \"{}\" sent to {}", email.subject, email.to);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail_config() -> MailConfig {
        MailConfig {
            server: "smtp.example.com".to_string(),
            port: 587,
            username: Some("club".to_string()),
            password: Some("secret".to_string()),
            from: "club@example.com".to_string(),
            from_name: "Motoclub".to_string(),
        }
    }

    #[tokio::test]
    async fn builds_smtp_transport_lazily() {
        assert!(EmailService::new(Some(&mail_config()), "Motoclub").is_ok());
    }

    #[tokio::test]
    async fn logs_instead_of_sending_without_server() {
        let service = EmailService::disabled("Motoclub");
        let email = service.confirmation("ana@example.com", "http://localhost/confirm");

        assert!(service.send(&email).await.is_ok());
    }

    #[test]
    fn confirmation_contains_link() {
        let email = EmailService::disabled("Motoclub")
            .confirmation("ana@example.com", "http://localhost:8000/confirm-email/abc");

        assert_eq!(email.to, "ana@example.com");
        assert!(email.body.contains("http://localhost:8000/confirm-email/abc"));
    }
}
