//! Test fixtures providing reusable in-memory models without database insertion.
//!
//! Fixtures back the factory defaults and can be used directly in unit tests that only
//! need a model value, e.g. for DTO conversion.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let agreement = fixture::agreement::entity_builder()
//!     .name("Fuel discount")
//!     .build();
//! ```

use chrono::{DateTime, TimeZone, Utc};

pub mod agreement;
pub mod event;
pub mod location;
pub mod profile;
pub mod user;

pub use agreement::{entity as agreement_entity, entity_builder as agreement_entity_builder};
pub use event::{entity as event_entity, entity_builder as event_entity_builder};
pub use location::{entity as location_entity, entity_builder as location_entity_builder};
pub use profile::{entity as profile_entity, entity_builder as profile_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};

/// Fixed timestamp used for `created_at`/`updated_at` of fixture models.
pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}
