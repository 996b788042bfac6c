//! Agreement fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::agreement;

use super::timestamp;

/// Default agreement name.
pub const DEFAULT_NAME: &str = "Workshop discount";

/// Default agreement start date (2026-01-01).
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default()
}

/// Default agreement end date (2026-12-31).
pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or_default()
}

/// Creates an active agreement model for company `1`.
///
/// # Default Values
/// - id: `1`
/// - name: `"Workshop discount"`
/// - start_date / end_date: the whole of 2026
/// - active: `true`
/// - company_id: `1`
pub fn entity() -> agreement::Model {
    entity_builder().build()
}

/// Creates an agreement builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let agreement = fixture::agreement::entity_builder()
///     .name("Helmet sale")
///     .company_id(3)
///     .build();
/// ```
pub fn entity_builder() -> AgreementEntityBuilder {
    AgreementEntityBuilder::default()
}

/// Builder for customized agreement models.
pub struct AgreementEntityBuilder {
    id: i32,
    name: String,
    description: Option<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    active: bool,
    company_id: i32,
}

impl Default for AgreementEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: None,
            start_date: default_start_date(),
            end_date: default_end_date(),
            active: true,
            company_id: 1,
        }
    }
}

impl AgreementEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn company_id(mut self, company_id: i32) -> Self {
        self.company_id = company_id;
        self
    }

    pub fn build(self) -> agreement::Model {
        agreement::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            active: self.active,
            company_id: self.company_id,
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
    fn creates_entity_with_defaults() {
        let agreement = entity();

        assert_eq!(agreement.id, 1);
        assert_eq!(agreement.name, DEFAULT_NAME);
        assert!(agreement.active);
        assert!(agreement.start_date <= agreement.end_date);
    }

    #[test]
    fn builder_creates_entity_with_custom_values() {
        let agreement = entity_builder()
            .id(4)
            .name("Helmet sale")
            .active(false)
            .company_id(9)
            .build();

        assert_eq!(agreement.id, 4);
        assert_eq!(agreement.name, "Helmet sale");
        assert!(!agreement.active);
        assert_eq!(agreement.company_id, 9);
    }
}
