//! Signed JWTs for login sessions, e-mail confirmation and password resets.
//!
//! Every token carries a `typ` claim and is only accepted for the purpose it was
//! issued for.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
    Confirmation,
    Reset,
}

impl TokenKind {
    pub fn lifetime(self) -> Duration {
        match self {
            Self::Access => Duration::minutes(15),
            Self::Refresh => Duration::days(7),
            Self::Confirmation => Duration::days(1),
            Self::Reset => Duration::minutes(60),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// E-mail address of the account.
    pub sub: String,
    pub exp: i64,
    pub typ: TokenKind,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token of `kind` for `email`, expiring after the kind's lifetime.
    pub fn issue(&self, email: &str, kind: TokenKind) -> Result<String, AppError> {
        self.issue_with_expiry(email, kind, (Utc::now() + kind.lifetime()).timestamp())
    }

    fn issue_with_expiry(&self, email: &str, kind: TokenKind, exp: i64) -> Result<String, AppError> {
        let claims = Claims {
            sub: email.to_string(),
            exp,
            typ: kind,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Verifies signature, expiry and purpose and returns the subject e-mail.
    ///
    /// # Returns
    /// - `Ok(String)` - E-mail address the token was issued for
    /// - `Err(AuthError::InvalidToken)` - Malformed, expired, wrongly signed, or issued
    ///   for another purpose
    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<String, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.typ != kind {
            return Err(AuthError::InvalidToken(format!(
                "expected a {:?} token, got {:?}",
                kind, data.claims.typ
            )));
        }

        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_token_for_its_own_purpose() {
        let tokens = TokenService::new("secret");
        let token = tokens.issue("ana@example.com", TokenKind::Access).unwrap();

        assert_eq!(
            tokens.verify(&token, TokenKind::Access).unwrap(),
            "ana@example.com"
        );
    }

    #[test]
    fn rejects_token_issued_for_another_purpose() {
        let tokens = TokenService::new("secret");
        let token = tokens.issue("ana@example.com", TokenKind::Refresh).unwrap();

        assert!(tokens.verify(&token, TokenKind::Access).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let tokens = TokenService::new("secret");
        let exp = (Utc::now() - Duration::minutes(5)).timestamp();
        let token = tokens
            .issue_with_expiry("ana@example.com", TokenKind::Access, exp)
            .unwrap();

        assert!(tokens.verify(&token, TokenKind::Access).is_err());
    }

    #[test]
    fn rejects_token_signed_with_another_key() {
        let token = TokenService::new("other")
            .issue("ana@example.com", TokenKind::Access)
            .unwrap();

        assert!(TokenService::new("secret")
            .verify(&token, TokenKind::Access)
            .is_err());
    }
}
