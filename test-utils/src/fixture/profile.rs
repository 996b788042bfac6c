//! Profile fixtures.

use chrono::NaiveDate;
use entity::{
    profile,
    sea_orm_active_enums::{DocumentType, GenderType, RhType},
};

use super::timestamp;

pub const DEFAULT_FIRST_NAME: &str = "Ana";
pub const DEFAULT_LAST_NAME: &str = "Restrepo";
pub const DEFAULT_DOCUMENT_NUMBER: &str = "1020304050";

/// Default birthdate, an adult member.
pub fn default_birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 6, 15).unwrap_or_default()
}

/// Creates a profile model with default values for user `1` in team `1`.
pub fn entity() -> profile::Model {
    entity_builder().build()
}

/// Creates a profile builder for customization.
pub fn entity_builder() -> ProfileEntityBuilder {
    ProfileEntityBuilder::default()
}

/// Builder for customized profile models.
pub struct ProfileEntityBuilder {
    id: i32,
    first_name: String,
    last_name: String,
    document_number: String,
    birthdate: NaiveDate,
    user_id: i32,
    team_id: i32,
}

impl Default for ProfileEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            document_number: DEFAULT_DOCUMENT_NUMBER.to_string(),
            birthdate: default_birthdate(),
            user_id: 1,
            team_id: 1,
        }
    }
}

impl ProfileEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn document_number(mut self, document_number: impl Into<String>) -> Self {
        self.document_number = document_number.into();
        self
    }

    pub fn birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = birthdate;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = team_id;
        self
    }

    pub fn build(self) -> profile::Model {
        profile::Model {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            nickname: None,
            telephone: Some("3001234567".to_string()),
            document_type: DocumentType::Cc,
            document_number: self.document_number,
            rh: RhType::OPositive,
            birthdate: self.birthdate,
            gender: GenderType::Female,
            photo: None,
            user_id: self.user_id,
            team_id: self.team_id,
            deleted: false,
            deleted_at: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }
}
