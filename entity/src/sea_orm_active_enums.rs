//! String-backed enums stored in the database.
//!
//! The string values are the ones the club's clients already exchange, so the serde
//! representation mirrors the stored value exactly.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserStatus {
    #[sea_orm(string_value = "activo")]
    #[serde(rename = "activo")]
    Active,
    #[sea_orm(string_value = "inactivo")]
    #[serde(rename = "inactivo")]
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PostStatus {
    #[sea_orm(string_value = "no publicado")]
    #[serde(rename = "no publicado")]
    Unpublished,
    #[sea_orm(string_value = "publicado")]
    #[serde(rename = "publicado")]
    Published,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum FeedbackStatus {
    #[sea_orm(string_value = "pendiente")]
    #[serde(rename = "pendiente")]
    Pending,
    #[sea_orm(string_value = "en revisión")]
    #[serde(rename = "en revisión")]
    InReview,
    #[sea_orm(string_value = "resuelto")]
    #[serde(rename = "resuelto")]
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum FeedbackType {
    #[sea_orm(string_value = "pregunta")]
    #[serde(rename = "pregunta")]
    Question,
    #[sea_orm(string_value = "sugerencia")]
    #[serde(rename = "sugerencia")]
    Suggestion,
    #[sea_orm(string_value = "queja")]
    #[serde(rename = "queja")]
    Complaint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EventType {
    #[sea_orm(string_value = "rodada")]
    #[serde(rename = "rodada")]
    Ride,
    #[sea_orm(string_value = "reunión informativa")]
    #[serde(rename = "reunión informativa")]
    InformationalMeeting,
    #[sea_orm(string_value = "reunión social")]
    #[serde(rename = "reunión social")]
    SocialMeeting,
    #[sea_orm(string_value = "evento de caridad")]
    #[serde(rename = "evento de caridad")]
    Charity,
    #[sea_orm(string_value = "exhibición")]
    #[serde(rename = "exhibición")]
    Exhibition,
    #[sea_orm(string_value = "competición")]
    #[serde(rename = "competición")]
    Competition,
    #[sea_orm(string_value = "educacional")]
    #[serde(rename = "educacional")]
    Educational,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum LocationType {
    #[sea_orm(string_value = "ciudad")]
    #[serde(rename = "ciudad")]
    City,
    #[sea_orm(string_value = "departamento")]
    #[serde(rename = "departamento")]
    Department,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ReactionType {
    #[sea_orm(string_value = "me gusta")]
    #[serde(rename = "me gusta")]
    Like,
    #[sea_orm(string_value = "no me gusta")]
    #[serde(rename = "no me gusta")]
    Dislike,
}

/// Colombian identity document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum DocumentType {
    #[sea_orm(string_value = "Cédula de Ciudadanía")]
    #[serde(rename = "Cédula de Ciudadanía")]
    Cc,
    #[sea_orm(string_value = "Tarjeta de Identidad")]
    #[serde(rename = "Tarjeta de Identidad")]
    Ti,
    #[sea_orm(string_value = "Registro Civil")]
    #[serde(rename = "Registro Civil")]
    Rc,
    #[sea_orm(string_value = "Pasaporte")]
    #[serde(rename = "Pasaporte")]
    Pp,
    #[sea_orm(string_value = "Tarjeta de Extranjería")]
    #[serde(rename = "Tarjeta de Extranjería")]
    Te,
    #[sea_orm(string_value = "Cédula de Extranjería")]
    #[serde(rename = "Cédula de Extranjería")]
    Ce,
    #[sea_orm(string_value = "Permiso Especial de Permanencia")]
    #[serde(rename = "Permiso Especial de Permanencia")]
    Pep,
    #[sea_orm(string_value = "Documento de Identificación Extranjero")]
    #[serde(rename = "Documento de Identificación Extranjero")]
    Die,
}

impl DocumentType {
    /// Short code printed on membership cards.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cc => "CC",
            Self::Ti => "TI",
            Self::Rc => "RC",
            Self::Pp => "PP",
            Self::Te => "TE",
            Self::Ce => "CE",
            Self::Pep => "PEP",
            Self::Die => "DIE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RhType {
    #[sea_orm(string_value = "O+")]
    #[serde(rename = "O+")]
    OPositive,
    #[sea_orm(string_value = "O-")]
    #[serde(rename = "O-")]
    ONegative,
    #[sea_orm(string_value = "A+")]
    #[serde(rename = "A+")]
    APositive,
    #[sea_orm(string_value = "A-")]
    #[serde(rename = "A-")]
    ANegative,
    #[sea_orm(string_value = "B+")]
    #[serde(rename = "B+")]
    BPositive,
    #[sea_orm(string_value = "B-")]
    #[serde(rename = "B-")]
    BNegative,
    #[sea_orm(string_value = "AB+")]
    #[serde(rename = "AB+")]
    AbPositive,
    #[sea_orm(string_value = "AB-")]
    #[serde(rename = "AB-")]
    AbNegative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum GenderType {
    #[sea_orm(string_value = "masculino")]
    #[serde(rename = "masculino")]
    Male,
    #[sea_orm(string_value = "femenino")]
    #[serde(rename = "femenino")]
    Female,
    #[sea_orm(string_value = "otro")]
    #[serde(rename = "otro")]
    Other,
    #[sea_orm(string_value = "no especificado")]
    #[serde(rename = "no especificado")]
    Unspecified,
}
