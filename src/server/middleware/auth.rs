use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::{auth::AuthService, crud::CrudService},
    state::AppState,
};

/// Role every administrative route requires.
pub const ADMIN_ROLE: &str = "admin";

pub enum Permission {
    /// The user's role must be one of the listed role names.
    AnyRole(&'static [&'static str]),
    /// The user must be the given user, or hold one of the listed roles.
    SelfOrRole(i32, &'static [&'static str]),
}

/// Authenticated account together with its role.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: entity::user::Model,
    pub role: entity::role::Model,
}

impl CurrentUser {
    pub fn has_role(&self, roles: &[&str]) -> bool {
        roles.contains(&self.role.name.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(&[ADMIN_ROLE])
    }
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Resolves the bearer token and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(CurrentUser)` - Active account allowed on the route
    /// - `Err(AuthError::MissingToken)` - No bearer token was sent
    /// - `Err(AuthError::InvalidToken)` / `Err(AuthError::UnknownSubject)` - Token cannot be used
    /// - `Err(AuthError::InactiveUser)` - The account is not active
    /// - `Err(AuthError::AccessDenied)` - A permission was not satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<CurrentUser, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let user = AuthService::new(self.state).current_user(token).await?;
        let role = CrudService::<entity::role::Entity>::new(&self.state.db)
            .repo()
            .find_active(user.role_id)
            .await?
            .ok_or_else(|| {
                AuthError::AccessDenied(user.id, format!("role #{} no longer exists", user.role_id))
            })?;

        let current = CurrentUser { user, role };

        for permission in permissions {
            match permission {
                Permission::AnyRole(roles) => {
                    if !current.has_role(roles) {
                        return Err(AuthError::AccessDenied(
                            current.user.id,
                            format!("role {} is not one of {:?}", current.role.name, roles),
                        )
                        .into());
                    }
                }
                Permission::SelfOrRole(user_id, roles) => {
                    if current.user.id != *user_id && !current.has_role(roles) {
                        return Err(AuthError::AccessDenied(
                            current.user.id,
                            format!("attempted to act on user #{}", user_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(current)
    }
}

/// Token of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
