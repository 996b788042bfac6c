//! User factory for creating test accounts.

use crate::factory::helpers::{next_id, now};
use crate::fixture;
use entity::sea_orm_active_enums::UserStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users.
///
/// Usernames and e-mails are made unique with [`next_id`]. Users are active by default.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db, role.id)
///     .email("admin@motoclub.test")
///     .status(UserStatus::Inactive)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user::Model,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, role_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::user::entity_builder()
            .username(format!("rider{}", id))
            .email(format!("rider{}@motoclub.test", id))
            .role_id(role_id)
            .build();

        Self { db, entity }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.entity.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    /// Sets the stored password hash. Pass the output of the server's hashing function.
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.entity.password = hash.into();
        self
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.entity.username),
            email: ActiveValue::Set(self.entity.email),
            password: ActiveValue::Set(self.entity.password),
            status: ActiveValue::Set(self.entity.status),
            role_id: ActiveValue::Set(self.entity.role_id),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now()),
            updated_at: ActiveValue::Set(now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active user with the given role.
pub async fn create_user(
    db: &DatabaseConnection,
    role_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, role_id).build().await
}
