//! Company and agreement parameters.
//!
//! Agreements are discounts or benefits a sponsoring company grants to one or more
//! teams for a date range.

use chrono::NaiveDate;
use sea_orm::ActiveValue;

use crate::{
    model::agreement::{
        AgreementDto, CompanyDto, CreateAgreementDto, CreateCompanyDto, UpdateAgreementDto,
        UpdateCompanyDto,
    },
    server::{data::soft_delete::Changes, error::AppError, util::validate},
};

#[derive(Debug, Clone)]
pub struct CreateCompanyParams {
    pub name: String,
    pub contact_name: String,
    pub contact_telephone: String,
    pub contact_address: Option<String>,
    pub location_id: i32,
}

impl CreateCompanyParams {
    pub fn from_dto(dto: CreateCompanyDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::text("Name", dto.name, 3, 50)?,
            contact_name: validate::text("Contact name", dto.contact_name, 3, 25)?,
            contact_telephone: validate::telephone(&dto.contact_telephone)?,
            contact_address: validate::optional_text("Contact address", dto.contact_address, 100)?,
            location_id: dto.location_id,
        })
    }

    pub fn into_active_model(self) -> entity::company::ActiveModel {
        entity::company::ActiveModel {
            name: ActiveValue::Set(self.name),
            contact_name: ActiveValue::Set(self.contact_name),
            contact_telephone: ActiveValue::Set(self.contact_telephone),
            contact_address: ActiveValue::Set(self.contact_address),
            location_id: ActiveValue::Set(self.location_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCompanyParams {
    pub name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_telephone: Option<String>,
    pub contact_address: Option<Option<String>>,
    pub location_id: Option<i32>,
}

impl UpdateCompanyParams {
    pub fn from_dto(dto: UpdateCompanyDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto
                .name
                .map(|v| validate::text("Name", v, 3, 50))
                .transpose()?,
            contact_name: dto
                .contact_name
                .map(|v| validate::text("Contact name", v, 3, 25))
                .transpose()?,
            contact_telephone: dto
                .contact_telephone
                .map(|v| validate::telephone(&v))
                .transpose()?,
            contact_address: dto
                .contact_address
                .map(|v| validate::optional_text("Contact address", v, 100))
                .transpose()?,
            location_id: dto.location_id,
        })
    }
}

impl Changes<entity::company::Entity> for UpdateCompanyParams {
    fn apply(self, model: &mut entity::company::ActiveModel) {
        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(contact_name) = self.contact_name {
            model.contact_name = ActiveValue::Set(contact_name);
        }
        if let Some(contact_telephone) = self.contact_telephone {
            model.contact_telephone = ActiveValue::Set(contact_telephone);
        }
        if let Some(contact_address) = self.contact_address {
            model.contact_address = ActiveValue::Set(contact_address);
        }
        if let Some(location_id) = self.location_id {
            model.location_id = ActiveValue::Set(location_id);
        }
    }
}

impl From<entity::company::Model> for CompanyDto {
    fn from(company: entity::company::Model) -> Self {
        Self {
            id: company.id,
            name: company.name,
            contact_name: company.contact_name,
            contact_telephone: company.contact_telephone,
            contact_address: company.contact_address,
            location_id: company.location_id,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAgreementParams {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
    pub company_id: i32,
}

impl CreateAgreementParams {
    /// Validates lengths and the date range of a new agreement.
    ///
    /// # Returns
    /// - `Ok(CreateAgreementParams)` - Trimmed and validated parameters
    /// - `Err(AppError::BadRequest)` - Name or description out of bounds, or the agreement
    ///   ends before it starts
    pub fn from_dto(dto: CreateAgreementDto) -> Result<Self, AppError> {
        validate::date_range(&dto.start_date, &dto.end_date)?;

        Ok(Self {
            name: validate::text("Name", dto.name, 3, 50)?,
            description: validate::optional_text("Description", dto.description, 2500)?,
            start_date: dto.start_date,
            end_date: dto.end_date,
            active: dto.active.unwrap_or(true),
            company_id: dto.company_id,
        })
    }

    pub fn into_active_model(self) -> entity::agreement::ActiveModel {
        entity::agreement::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            active: ActiveValue::Set(self.active),
            company_id: ActiveValue::Set(self.company_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAgreementParams {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: Option<bool>,
    pub company_id: Option<i32>,
}

impl UpdateAgreementParams {
    /// Validates the provided fields.
    ///
    /// The date range is only checked here when both ends are provided; the service
    /// checks a single new end against the stored one.
    pub fn from_dto(dto: UpdateAgreementDto) -> Result<Self, AppError> {
        if let (Some(start), Some(end)) = (&dto.start_date, &dto.end_date) {
            validate::date_range(start, end)?;
        }

        Ok(Self {
            name: dto
                .name
                .map(|v| validate::text("Name", v, 3, 50))
                .transpose()?,
            description: dto
                .description
                .map(|v| validate::optional_text("Description", v, 2500))
                .transpose()?,
            start_date: dto.start_date,
            end_date: dto.end_date,
            active: dto.active,
            company_id: dto.company_id,
        })
    }
}

impl Changes<entity::agreement::Entity> for UpdateAgreementParams {
    fn apply(self, model: &mut entity::agreement::ActiveModel) {
        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = self.description {
            model.description = ActiveValue::Set(description);
        }
        if let Some(start_date) = self.start_date {
            model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = self.end_date {
            model.end_date = ActiveValue::Set(end_date);
        }
        if let Some(active) = self.active {
            model.active = ActiveValue::Set(active);
        }
        if let Some(company_id) = self.company_id {
            model.company_id = ActiveValue::Set(company_id);
        }
    }
}

impl From<entity::agreement::Model> for AgreementDto {
    fn from(agreement: entity::agreement::Model) -> Self {
        Self {
            id: agreement.id,
            name: agreement.name,
            description: agreement.description,
            start_date: agreement.start_date,
            end_date: agreement.end_date,
            active: agreement.active,
            company_id: agreement.company_id,
            created_at: agreement.created_at,
            updated_at: agreement.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto() -> CreateAgreementDto {
        CreateAgreementDto {
            name: "  Valid agreement ".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            active: None,
            company_id: 2,
        }
    }

    #[test]
    fn trims_name_and_defaults_to_active() {
        let params = CreateAgreementParams::from_dto(create_dto()).unwrap();

        assert_eq!(params.name, "Valid agreement");
        assert!(params.active);
    }

    #[test]
    fn rejects_inverted_dates_on_create() {
        let mut dto = create_dto();
        dto.start_date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        assert!(matches!(
            CreateAgreementParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn update_checks_range_only_with_both_ends() {
        let only_start = UpdateAgreementDto {
            start_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            ..Default::default()
        };
        let inverted = UpdateAgreementDto {
            start_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2029, 1, 1),
            ..Default::default()
        };

        assert!(UpdateAgreementParams::from_dto(only_start).is_ok());
        assert!(UpdateAgreementParams::from_dto(inverted).is_err());
    }
}
