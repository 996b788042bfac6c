//! Location fixtures.

use entity::{location, sea_orm_active_enums::LocationType};

use super::timestamp;

/// Default location name.
pub const DEFAULT_NAME: &str = "Medellín";

/// Creates a city location model with default values.
pub fn entity() -> location::Model {
    entity_builder().build()
}

/// Creates a location builder for customization.
pub fn entity_builder() -> LocationEntityBuilder {
    LocationEntityBuilder::default()
}

/// Builder for customized location models.
pub struct LocationEntityBuilder {
    id: i32,
    name: String,
    kind: LocationType,
    is_capital: bool,
    department_id: Option<i32>,
}

impl Default for LocationEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            kind: LocationType::City,
            is_capital: false,
            department_id: None,
        }
    }
}

impl LocationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn kind(mut self, kind: LocationType) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_capital(mut self, is_capital: bool) -> Self {
        self.is_capital = is_capital;
        self
    }

    pub fn department_id(mut self, department_id: Option<i32>) -> Self {
        self.department_id = department_id;
        self
    }

    pub fn build(self) -> location::Model {
        location::Model {
            id: self.id,
            name: self.name,
            kind: self.kind,
            is_capital: self.is_capital,
            department_id: self.department_id,
            deleted: false,
            deleted_at: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }
}
