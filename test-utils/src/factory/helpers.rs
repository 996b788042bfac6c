//! Shared helper utilities for factory methods.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Timestamp used for `created_at`/`updated_at` of inserted rows.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Creates a complete club member with everything it depends on.
///
/// This creates, in order:
/// 1. Location
/// 2. Team in that location
/// 3. Role
/// 4. User with that role
/// 5. Profile linking the user to the team
///
/// # Returns
/// - `Ok((location, team, role, user, profile))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::location::Model,
        entity::team::Model,
        entity::role::Model,
        entity::user::Model,
        entity::profile::Model,
    ),
    DbErr,
> {
    let location = crate::factory::location::create_location(db).await?;
    let team = crate::factory::team::create_team(db, location.id).await?;
    let role = crate::factory::role::create_role(db).await?;
    let user = crate::factory::user::create_user(db, role.id).await?;
    let profile = crate::factory::profile::create_profile(db, user.id, team.id).await?;

    Ok((location, team, role, user, profile))
}

/// Creates another member (role, user and profile) inside an existing team.
///
/// # Returns
/// - `Ok((user, profile))` - The new user and its profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_in_team(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<(entity::user::Model, entity::profile::Model), DbErr> {
    let role = crate::factory::role::create_role(db).await?;
    let user = crate::factory::user::create_user(db, role.id).await?;
    let profile = crate::factory::profile::create_profile(db, user.id, team_id).await?;

    Ok((user, profile))
}
