//! Resolution between login accounts and member profiles.
//!
//! Payloads reference members by user id while the tables they write point at profiles.
//! Responses go the other way: a profile id is turned back into the account it belongs
//! to, with the profile embedded.

use std::collections::HashMap;

use entity::soft_delete::SoftDelete;
use sea_orm::{ColumnTrait, DatabaseConnection};

use crate::{
    model::user::UserDto,
    server::{error::AppError, service::crud::CrudService},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active profile of the active account `user_id`.
    ///
    /// # Returns
    /// - `Ok(profile::Model)` - Member profile
    /// - `Err(AppError::NotFound)` - `User #<id> not found!` when the account is missing,
    ///   soft deleted, or has no active profile
    pub async fn profile_of(&self, user_id: i32) -> Result<entity::profile::Model, AppError> {
        let users = CrudService::<entity::user::Entity>::new(self.db);
        let profiles = CrudService::<entity::profile::Entity>::new(self.db);

        let missing = || AppError::not_found(entity::user::Entity::LABEL, user_id);

        if !users.repo().exists(user_id).await? {
            return Err(missing());
        }

        profiles
            .find_one_where(entity::profile::Column::UserId.eq(user_id))
            .await?
            .ok_or_else(missing)
    }

    /// Account owning the profile `profile_id`, with the profile embedded.
    pub async fn user_of_profile(&self, profile_id: i32) -> Result<UserDto, AppError> {
        let profile = CrudService::<entity::profile::Entity>::new(self.db)
            .get(profile_id)
            .await?;
        let user_id = profile.user_id;

        self.users_of_profiles(vec![profile])
            .await?
            .pop()
            .ok_or_else(|| AppError::not_found(entity::user::Entity::LABEL, user_id))
    }

    /// Accounts of `profiles`, keeping their order.
    ///
    /// Profiles whose account was soft deleted are left out.
    pub async fn users_of_profiles(
        &self,
        profiles: Vec<entity::profile::Model>,
    ) -> Result<Vec<UserDto>, AppError> {
        let user_ids: Vec<i32> = profiles.iter().map(|p| p.user_id).collect();

        let mut users: HashMap<i32, entity::user::Model> =
            CrudService::<entity::user::Entity>::new(self.db)
                .find_where(entity::user::Column::Id.is_in(user_ids))
                .await?
                .into_iter()
                .map(|u| (u.id, u))
                .collect();

        Ok(profiles
            .into_iter()
            .filter_map(|profile| {
                users
                    .remove(&profile.user_id)
                    .map(|user| UserDto::from_parts(user, Some(profile)))
            })
            .collect())
    }

    /// Embeds the active profile of each account, keeping their order.
    pub async fn with_profiles(
        &self,
        users: Vec<entity::user::Model>,
    ) -> Result<Vec<UserDto>, AppError> {
        let user_ids: Vec<i32> = users.iter().map(|u| u.id).collect();

        let mut profiles: HashMap<i32, entity::profile::Model> =
            CrudService::<entity::profile::Entity>::new(self.db)
                .find_where(entity::profile::Column::UserId.is_in(user_ids))
                .await?
                .into_iter()
                .map(|p| (p.user_id, p))
                .collect();

        Ok(users
            .into_iter()
            .map(|user| {
                let profile = profiles.remove(&user.id);
                UserDto::from_parts(user, profile)
            })
            .collect())
    }

    pub async fn with_profile(&self, user: entity::user::Model) -> Result<UserDto, AppError> {
        let profile = CrudService::<entity::profile::Entity>::new(self.db)
            .find_one_where(entity::profile::Column::UserId.eq(user.id))
            .await?;

        Ok(UserDto::from_parts(user, profile))
    }
}
