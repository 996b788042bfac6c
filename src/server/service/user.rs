//! Member accounts: listing, updates, removal, birthdays and the club card.

use chrono::{Datelike, NaiveDate, Utc};
use entity::{profile, user};
use sea_orm::{ActiveEnum, ColumnTrait, Condition, DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{MembershipCardDto, UserDto},
    server::{
        data::soft_delete,
        error::AppError,
        model::{
            pagination::{ListQuery, Paginated},
            user::{AccountChanges, UpdateUserParams},
        },
        service::{crud::CrudService, member::MemberService},
    },
};

/// Which birthdays to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdateQuery {
    /// Born on exactly this date.
    On(NaiveDate),
    /// Born within the inclusive range.
    Between(NaiveDate, NaiveDate),
}

impl BirthdateQuery {
    /// Builds the query from the optional `date`, `start_date` and `end_date` parameters.
    ///
    /// `date` wins when given; otherwise both ends of the range are required.
    pub fn from_params(
        date: Option<NaiveDate>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, AppError> {
        match (date, start_date, end_date) {
            (Some(date), _, _) => Ok(Self::On(date)),
            (None, Some(start), Some(end)) => Ok(Self::Between(start, end)),
            _ => Err(AppError::BadRequest(
                "You must provide either 'date' or both 'start_date' and 'end_date' parameters."
                    .to_string(),
            )),
        }
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    users: CrudService<'a, user::Entity>,
    profiles: CrudService<'a, profile::Entity>,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            users: CrudService::new(db),
            profiles: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<UserDto>, AppError> {
        let page = self.users.list(query).await?;

        Ok(Paginated {
            data: MemberService::new(self.db).with_profiles(page.data).await?,
            pagination: page.pagination,
        })
    }

    pub async fn get(&self, id: i32) -> Result<UserDto, AppError> {
        let user = self.users.get(id).await?;

        MemberService::new(self.db).with_profile(user).await
    }

    /// Active account with the given e-mail address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AppError> {
        self.users
            .find_one_where(user::Column::Email.eq(email.trim().to_lowercase()))
            .await
    }

    /// Applies account and profile changes.
    ///
    /// Permission to change the role or status is checked by the caller. Every referenced
    /// record is checked before anything is written, and both rows are updated in one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Account with its profile after the update
    /// - `Err(AppError::NotFound)` - Unknown user, role or team, or no active profile
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<UserDto, AppError> {
        let user = self.users.get(id).await?;
        CrudService::<entity::role::Entity>::new(self.db)
            .require_opt(params.role_id)
            .await?;

        let profile = match &params.profile {
            Some(changes) => {
                CrudService::<entity::team::Entity>::new(self.db)
                    .require_opt(changes.team_id)
                    .await?;
                Some(MemberService::new(self.db).profile_of(id).await?)
            }
            None => None,
        };

        let account = params.changes_account().then(|| AccountChanges {
            role_id: params.role_id,
            status: params.status,
            password: None,
        });

        let txn = self.db.begin().await?;

        if let Some(changes) = account {
            soft_delete::update::<user::Entity, _, _>(&txn, user, changes).await?;
        }
        if let (Some(profile), Some(changes)) = (profile, params.profile) {
            soft_delete::update::<profile::Entity, _, _>(&txn, profile, changes).await?;
        }

        txn.commit().await?;

        tracing::info!("Updated user #{}", id);

        self.get(id).await
    }

    pub async fn set_account(&self, id: i32, changes: AccountChanges) -> Result<user::Model, AppError> {
        self.users.update(id, changes).await
    }

    /// Removes an account.
    ///
    /// A soft delete marks the profile deleted as well; a hard delete leaves the
    /// profile and everything the member owns to the database cascade.
    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        let profile = if hard {
            None
        } else {
            self.profiles
                .find_one_where(profile::Column::UserId.eq(id))
                .await?
        };

        self.users.delete(id, hard).await?;

        if let Some(profile) = profile {
            self.profiles.delete(profile.id, false).await?;
        }

        tracing::info!("Deleted user #{} (hard: {})", id, hard);

        Ok(())
    }

    /// Members whose birthday, by month and day, is `today`.
    pub async fn birthdays_on(&self, today: NaiveDate) -> Result<Vec<UserDto>, AppError> {
        let profiles: Vec<profile::Model> = self
            .profiles
            .find_where(Condition::all())
            .await?
            .into_iter()
            .filter(|p| p.birthdate.month() == today.month() && p.birthdate.day() == today.day())
            .collect();

        MemberService::new(self.db).users_of_profiles(profiles).await
    }

    pub async fn birthdays_today(&self) -> Result<Vec<UserDto>, AppError> {
        self.birthdays_on(Utc::now().date_naive()).await
    }

    /// Members born on a date or within a range of dates.
    pub async fn by_birthdate(&self, query: BirthdateQuery) -> Result<Vec<UserDto>, AppError> {
        let condition = match query {
            BirthdateQuery::On(date) => Condition::all().add(profile::Column::Birthdate.eq(date)),
            BirthdateQuery::Between(start, end) => {
                Condition::all().add(profile::Column::Birthdate.between(start, end))
            }
        };

        let profiles = self.profiles.find_where(condition).await?;

        MemberService::new(self.db).users_of_profiles(profiles).await
    }

    /// Data printed on the member's club card.
    ///
    /// # Arguments
    /// - `id` - User id of the member
    /// - `club_name` - Name of the club printed on the card
    pub async fn membership_card(
        &self,
        id: i32,
        club_name: &str,
    ) -> Result<MembershipCardDto, AppError> {
        let user = self.users.get(id).await?;
        let profile = MemberService::new(self.db).profile_of(id).await?;
        let role = CrudService::<entity::role::Entity>::new(self.db)
            .get(user.role_id)
            .await?;
        let team = CrudService::<entity::team::Entity>::new(self.db)
            .get(profile.team_id)
            .await?;
        let location = CrudService::<entity::location::Entity>::new(self.db)
            .get(team.location_id)
            .await?;

        let issued = Utc::now().date_naive();
        let valid_until = NaiveDate::from_ymd_opt(issued.year(), 12, 31).unwrap_or(issued);

        Ok(MembershipCardDto {
            club_name: club_name.to_string(),
            card_number: format!("{:06}", profile.id),
            member_name: format!("{} {}", profile.first_name, profile.last_name),
            nickname: profile.nickname,
            document: format!(
                "{} {}",
                profile.document_type.code(),
                profile.document_number
            ),
            rh: profile.rh.to_value(),
            role: role.name,
            team: team.name,
            location: location.name,
            telephone: profile.telephone,
            member_since: user.created_at.date_naive(),
            valid_until,
            photo: profile.photo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exact_date_wins_over_range() {
        let query =
            BirthdateQuery::from_params(Some(date(1990, 1, 1)), Some(date(1980, 1, 1)), None)
                .unwrap();

        assert_eq!(query, BirthdateQuery::On(date(1990, 1, 1)));
    }

    #[test]
    fn range_needs_both_ends() {
        assert!(BirthdateQuery::from_params(None, Some(date(1980, 1, 1)), None).is_err());
        assert!(BirthdateQuery::from_params(None, None, None).is_err());
        assert_eq!(
            BirthdateQuery::from_params(None, Some(date(1980, 1, 1)), Some(date(1990, 1, 1)))
                .unwrap(),
            BirthdateQuery::Between(date(1980, 1, 1), date(1990, 1, 1))
        );
    }
}
