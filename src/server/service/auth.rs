//! Registration, login and the account e-mail flows.

use entity::sea_orm_active_enums::UserStatus;
use sea_orm::{ColumnTrait, TransactionTrait};

use crate::{
    model::{auth::TokenDto, user::UserDto},
    server::{
        data::soft_delete,
        error::{auth::AuthError, AppError},
        model::user::{AccountChanges, RegisterParams},
        service::{
            crud::CrudService,
            role::RoleService,
            token::TokenKind,
            user::UserService,
        },
        state::AppState,
        util::{
            password::{hash_password_blocking, verify_password_blocking},
            validate,
        },
    },
};

pub struct AuthService<'a> {
    state: &'a AppState,
}

impl<'a> AuthService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Creates an inactive account with its member profile and mails a confirmation link.
    ///
    /// The account and profile are written in one transaction. The e-mail is sent in the
    /// background once the transaction is committed.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - New account with its profile
    /// - `Err(AppError::Conflict)` - E-mail or username already registered
    /// - `Err(AppError::NotFound)` - Unknown role or team
    pub async fn register(&self, params: RegisterParams) -> Result<UserDto, AppError> {
        let db = &self.state.db;
        let users = CrudService::<entity::user::Entity>::new(db);

        if UserService::new(db).find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "User with email {} is already registered!",
                params.email
            )));
        }
        if users
            .find_one_where(entity::user::Column::Username.eq(params.username.as_str()))
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "User {} already exists!",
                params.username
            )));
        }

        let role = match params.role_id {
            Some(role_id) => RoleService::new(db).get(role_id).await?,
            None => RoleService::new(db).default_role().await?,
        };
        CrudService::<entity::team::Entity>::new(db)
            .require(params.profile.team_id)
            .await?;

        let password_hash = hash_password_blocking(params.password.clone()).await?;

        let txn = db.begin().await?;

        let user = soft_delete::insert::<entity::user::Entity, _>(
            &txn,
            params.user_active_model(password_hash, role.id),
        )
        .await
        .map_err(|err| AppError::conflict_on_duplicate(err, "User", &params.username))?;

        let profile = soft_delete::insert::<entity::profile::Entity, _>(
            &txn,
            params.profile.into_active_model(user.id),
        )
        .await?;

        txn.commit().await?;

        tracing::info!("Registered user {} (#{})", user.email, user.id);

        let token = self.state.tokens.issue(&user.email, TokenKind::Confirmation)?;
        let link = self.state.config.link(&format!("/confirm-email/{}", token));
        self.state
            .email
            .send_in_background(self.state.email.confirmation(&user.email, &link));

        Ok(UserDto::from_parts(user, Some(profile)))
    }

    /// Checks credentials and issues an access/refresh pair.
    ///
    /// # Returns
    /// - `Ok(TokenDto)` - Bearer token pair
    /// - `Err(AuthError::InvalidCredentials)` - Unknown e-mail or wrong password
    /// - `Err(AuthError::InactiveUser)` - The account has not been confirmed
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenDto, AppError> {
        let user = UserService::new(&self.state.db)
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;
        if !verify_password_blocking(password.to_string(), user.password.clone()).await {
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.status != UserStatus::Active {
            return Err(AuthError::InactiveUser(user.id).into());
        }

        self.token_pair(&user.email)
    }

    /// Exchanges a refresh token for a new pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenDto, AppError> {
        let email = self.state.tokens.verify(refresh_token, TokenKind::Refresh)?;
        let user = self.active_user(&email).await?;

        self.token_pair(&user.email)
    }

    /// Resolves an access token to its active account.
    ///
    /// # Returns
    /// - `Ok(user::Model)` - Active account the token was issued for
    /// - `Err(AuthError::InvalidToken)` - Token cannot be used as an access token
    /// - `Err(AuthError::UnknownSubject)` - Subject no longer resolves to an account
    /// - `Err(AuthError::InactiveUser)` - The account is not active
    pub async fn current_user(&self, access_token: &str) -> Result<entity::user::Model, AppError> {
        let email = self.state.tokens.verify(access_token, TokenKind::Access)?;

        self.active_user(&email).await
    }

    /// Activates the account a confirmation token was issued for.
    pub async fn confirm_email(&self, token: &str) -> Result<(), AppError> {
        let email = self.state.tokens.verify(token, TokenKind::Confirmation)?;
        let users = UserService::new(&self.state.db);

        let user = users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UnknownSubject(email))?;

        if user.status == UserStatus::Active {
            return Err(AppError::Conflict(format!(
                "User with email {} is already active!",
                user.email
            )));
        }

        users.set_account(user.id, AccountChanges::activate()).await?;

        tracing::info!("Activated user {} (#{})", user.email, user.id);

        Ok(())
    }

    pub async fn change_password(
        &self,
        user: &entity::user::Model,
        old_password: &str,
        new_password: &str,
    ) -> Result<UserDto, AppError> {
        if !verify_password_blocking(old_password.to_string(), user.password.clone()).await {
            return Err(AppError::BadRequest("Old password is incorrect!".to_string()));
        }
        if old_password == new_password {
            return Err(AppError::BadRequest(
                "New password cannot be the same as the old password.".to_string(),
            ));
        }

        let users = UserService::new(&self.state.db);
        self.set_password(&users, user.id, new_password).await?;

        users.get(user.id).await
    }

    /// Mails a password reset link to an existing account.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let email = validate::email(email)?;
        let user = UserService::new(&self.state.db)
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))?;

        let token = self.state.tokens.issue(&user.email, TokenKind::Reset)?;
        let link = self.state.config.link(&format!("/reset-password/{}", token));
        self.state
            .email
            .send_in_background(self.state.email.password_reset(&user.email, &link));

        Ok(())
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        let email = self.state.tokens.verify(token, TokenKind::Reset)?;
        let users = UserService::new(&self.state.db);

        let user = users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UnknownSubject(email))?;

        self.set_password(&users, user.id, new_password).await?;

        tracing::info!("Password reset for user #{}", user.id);

        Ok(())
    }

    async fn set_password(
        &self,
        users: &UserService<'_>,
        user_id: i32,
        new_password: &str,
    ) -> Result<(), AppError> {
        let password = validate::password(new_password)?;
        let hash = hash_password_blocking(password).await?;

        users
            .set_account(user_id, AccountChanges::password(hash))
            .await?;

        Ok(())
    }

    async fn active_user(&self, email: &str) -> Result<entity::user::Model, AppError> {
        let user = UserService::new(&self.state.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::UnknownSubject(email.to_string()))?;

        if user.status != UserStatus::Active {
            return Err(AuthError::InactiveUser(user.id).into());
        }

        Ok(user)
    }

    fn token_pair(&self, email: &str) -> Result<TokenDto, AppError> {
        Ok(TokenDto {
            access_token: self.state.tokens.issue(email, TokenKind::Access)?,
            refresh_token: self.state.tokens.issue(email, TokenKind::Refresh)?,
            token_type: "bearer".to_string(),
        })
    }
}
