//! User fixtures.

use entity::{sea_orm_active_enums::UserStatus, user};

use super::timestamp;

/// Default username.
pub const DEFAULT_USERNAME: &str = "rider";

/// Default e-mail address.
pub const DEFAULT_EMAIL: &str = "rider@motoclub.test";

/// Placeholder stored in the password column. It is not a valid hash; tests that log in
/// set a real hash through `UserFactory::password_hash`.
pub const DEFAULT_PASSWORD_HASH: &str = "not-a-hash";

/// Creates an active user model with default values.
///
/// # Default Values
/// - id: `1`
/// - username: `"rider"`
/// - email: `"rider@motoclub.test"`
/// - status: `UserStatus::Active`
/// - role_id: `1`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for customized user models.
pub struct UserEntityBuilder {
    id: i32,
    username: String,
    email: String,
    password: String,
    status: UserStatus,
    role_id: i32,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            username: DEFAULT_USERNAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD_HASH.to_string(),
            status: UserStatus::Active,
            role_id: 1,
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    pub fn role_id(mut self, role_id: i32) -> Self {
        self.role_id = role_id;
        self
    }

    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            username: self.username,
            email: self.email,
            password: self.password,
            status: self.status,
            role_id: self.role_id,
            deleted: false,
            deleted_at: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_active_user_by_default() {
        let user = entity();

        assert_eq!(user.username, DEFAULT_USERNAME);
        assert_eq!(user.email, DEFAULT_EMAIL);
        assert_eq!(user.status, UserStatus::Active);
        assert!(!user.deleted);
    }

    #[test]
    fn builder_overrides_status() {
        let user = entity_builder().status(UserStatus::Inactive).build();

        assert_eq!(user.status, UserStatus::Inactive);
        assert_eq!(user.role_id, 1);
    }
}
