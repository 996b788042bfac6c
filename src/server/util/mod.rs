//! Small helpers shared by the model and service layers.

pub mod password;
pub mod query;
pub mod serde;
pub mod slug;
pub mod validate;
