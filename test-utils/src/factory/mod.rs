//! Factory methods for inserting test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for default creation. Unique columns get a value derived from
//! [`helpers::next_id`] so several rows can be created in one test.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (location, team, role, user, profile) =
//!     factory::helpers::create_member_with_dependencies(&db).await?;
//!
//! let event = factory::event::EventFactory::new(&db, location.id, profile.id, team.id)
//!     .name("Night ride")
//!     .build()
//!     .await?;
//! ```

pub mod agreement;
pub mod brand;
pub mod comment;
pub mod company;
pub mod event;
pub mod feedback;
pub mod helpers;
pub mod location;
pub mod motorcycle;
pub mod participation;
pub mod path;
pub mod post;
pub mod profile;
pub mod role;
pub mod tag;
pub mod team;
pub mod user;

pub use agreement::create_agreement;
pub use brand::create_brand;
pub use comment::create_comment;
pub use company::create_company;
pub use event::create_event;
pub use feedback::create_feedback;
pub use location::create_location;
pub use motorcycle::create_motorcycle;
pub use participation::create_participation;
pub use path::create_path;
pub use post::create_post;
pub use profile::create_profile;
pub use role::create_role;
pub use tag::create_tag;
pub use team::create_team;
pub use user::create_user;
