//! Events and the per-member participations and reviews attached to them.
//!
//! Participations and reviews are addressed by `(event_id, user_id)`; the user id is
//! resolved to the member profile the rows point at.

use entity::{event, participation, review};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::user::UserDto,
    server::{
        error::AppError,
        model::{
            event::{
                CreateEventParams, CreateParticipationParams, CreateReviewParams,
                UpdateEventParams, UpdateParticipationParams, UpdateReviewParams,
            },
            pagination::{ListQuery, Paginated},
        },
        service::{crud::CrudService, member::MemberService},
        util::validate,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    events: CrudService<'a, event::Entity>,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            events: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<event::Model>, AppError> {
        self.events.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<event::Model, AppError> {
        self.events.get(id).await
    }

    /// Creates an event organized by a member of the event's team.
    ///
    /// # Returns
    /// - `Ok(event::Model)` - The new event
    /// - `Err(AppError::NotFound)` - Unknown location, organizer, team or path
    /// - `Err(AppError::BadRequest)` - The organizer is not a member of the team
    pub async fn create(&self, params: CreateEventParams) -> Result<event::Model, AppError> {
        CrudService::<entity::location::Entity>::new(self.db)
            .require(params.location_id)
            .await?;
        let organizer = MemberService::new(self.db)
            .profile_of(params.organizer_user_id)
            .await?;
        CrudService::<entity::team::Entity>::new(self.db)
            .require(params.team_id)
            .await?;
        CrudService::<entity::path::Entity>::new(self.db)
            .require_opt(params.path_id)
            .await?;

        require_team_member(&organizer, params.team_id)?;

        let name = params.name.clone();
        let event = self
            .events
            .create_unique(params.into_active_model(organizer.id), &name)
            .await?;

        tracing::info!(
            "Created event {} (#{}) for team #{}",
            event.name,
            event.id,
            event.team_id
        );

        Ok(event)
    }

    pub async fn update(&self, id: i32, mut params: UpdateEventParams) -> Result<event::Model, AppError> {
        let current = self.events.get(id).await?;

        CrudService::<entity::location::Entity>::new(self.db)
            .require_opt(params.location_id)
            .await?;
        CrudService::<entity::team::Entity>::new(self.db)
            .require_opt(params.team_id)
            .await?;
        CrudService::<entity::path::Entity>::new(self.db)
            .require_opt(params.path_id.flatten())
            .await?;

        if params.start_date.is_some() || params.end_date.is_some() {
            validate::date_range(
                &params.start_date.unwrap_or(current.start_date),
                &params.end_date.unwrap_or(current.end_date),
            )?;
        }

        if params.organizer_user_id.is_some() || params.team_id.is_some() {
            let members = MemberService::new(self.db);
            let organizer = match params.organizer_user_id {
                Some(user_id) => members.profile_of(user_id).await?,
                None => {
                    CrudService::<entity::profile::Entity>::new(self.db)
                        .get(current.organizer_id)
                        .await?
                }
            };

            require_team_member(&organizer, params.team_id.unwrap_or(current.team_id))?;
            params.organizer_id = Some(organizer.id);
        }

        let name = params.name.clone();
        self.events.update_unique(id, params, name.as_deref()).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.events.delete(id, hard).await
    }

    pub async fn location(&self, id: i32) -> Result<entity::location::Model, AppError> {
        let event = self.events.get(id).await?;

        CrudService::<entity::location::Entity>::new(self.db)
            .get(event.location_id)
            .await
    }

    pub async fn organizer(&self, id: i32) -> Result<UserDto, AppError> {
        let event = self.events.get(id).await?;

        MemberService::new(self.db)
            .user_of_profile(event.organizer_id)
            .await
    }

    pub async fn team(&self, id: i32) -> Result<entity::team::Model, AppError> {
        let event = self.events.get(id).await?;

        CrudService::<entity::team::Entity>::new(self.db)
            .get(event.team_id)
            .await
    }

    pub async fn path(&self, id: i32) -> Result<entity::path::Model, AppError> {
        let event = self.events.get(id).await?;

        let Some(path_id) = event.path_id else {
            return Err(AppError::NotFound(format!(
                "No path found for event #{}!",
                id
            )));
        };

        CrudService::<entity::path::Entity>::new(self.db)
            .get(path_id)
            .await
    }
}

fn require_team_member(organizer: &entity::profile::Model, team_id: i32) -> Result<(), AppError> {
    if organizer.team_id != team_id {
        return Err(AppError::BadRequest(
            "The organizer must be a member of the specified team.".to_string(),
        ));
    }

    Ok(())
}

/// Looks up the event and the member profile a participation or review refers to.
async fn event_and_member(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<(event::Model, entity::profile::Model), AppError> {
    let event = CrudService::<event::Entity>::new(db).get(event_id).await?;
    let member = MemberService::new(db).profile_of(user_id).await?;

    Ok((event, member))
}

pub struct ParticipationService<'a> {
    db: &'a DatabaseConnection,
    participations: CrudService<'a, participation::Entity>,
}

impl<'a> ParticipationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            participations: CrudService::new(db),
        }
    }

    /// Registers a member in an event.
    ///
    /// # Returns
    /// - `Ok(participation::Model)` - The new participation
    /// - `Err(AppError::NotFound)` - Unknown event or user
    /// - `Err(AppError::BadRequest)` - The member already participates
    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        params: CreateParticipationParams,
    ) -> Result<participation::Model, AppError> {
        let (event, member) = event_and_member(self.db, event_id, user_id).await?;

        if self.find(event.id, member.id).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "User #{} is already part of the event #{}!",
                user_id, event_id
            )));
        }

        self.participations
            .create(params.into_active_model(member.id, event.id))
            .await
    }

    pub async fn get(&self, event_id: i32, user_id: i32) -> Result<participation::Model, AppError> {
        let (event, member) = event_and_member(self.db, event_id, user_id).await?;

        self.find(event.id, member.id)
            .await?
            .ok_or_else(|| not_participating(event_id, user_id))
    }

    pub async fn update(
        &self,
        event_id: i32,
        user_id: i32,
        params: UpdateParticipationParams,
    ) -> Result<participation::Model, AppError> {
        let participation = self.get(event_id, user_id).await?;

        self.participations.update(participation.id, params).await
    }

    pub async fn delete(&self, event_id: i32, user_id: i32, hard: bool) -> Result<(), AppError> {
        let participation = self.get(event_id, user_id).await?;

        self.participations.delete(participation.id, hard).await
    }

    /// Participations of an event, optionally narrowed by attendance.
    pub async fn by_event(
        &self,
        event_id: i32,
        attended: Option<bool>,
    ) -> Result<Vec<participation::Model>, AppError> {
        CrudService::<event::Entity>::new(self.db)
            .require(event_id)
            .await?;

        self.participations
            .find_where(
                Condition::all()
                    .add(participation::Column::EventId.eq(event_id))
                    .add_option(attended.map(|a| participation::Column::Attended.eq(a))),
            )
            .await
    }

    /// Participations of a member, optionally narrowed by attendance.
    pub async fn by_user(
        &self,
        user_id: i32,
        attended: Option<bool>,
    ) -> Result<Vec<participation::Model>, AppError> {
        let member = MemberService::new(self.db).profile_of(user_id).await?;

        self.participations
            .find_where(
                Condition::all()
                    .add(participation::Column::MemberId.eq(member.id))
                    .add_option(attended.map(|a| participation::Column::Attended.eq(a))),
            )
            .await
    }

    async fn find(
        &self,
        event_id: i32,
        member_id: i32,
    ) -> Result<Option<participation::Model>, AppError> {
        self.participations
            .find_one_where(
                Condition::all()
                    .add(participation::Column::EventId.eq(event_id))
                    .add(participation::Column::MemberId.eq(member_id)),
            )
            .await
    }
}

fn not_participating(event_id: i32, user_id: i32) -> AppError {
    AppError::NotFound(format!(
        "User #{} not participate in event #{}!",
        user_id, event_id
    ))
}

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
    reviews: CrudService<'a, review::Entity>,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            reviews: CrudService::new(db),
        }
    }

    /// Records a member's review of an event they attended.
    ///
    /// # Returns
    /// - `Ok(review::Model)` - The new review
    /// - `Err(AppError::NotFound)` - Unknown event or user
    /// - `Err(AppError::BadRequest)` - No attended participation, or already reviewed
    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        params: CreateReviewParams,
    ) -> Result<review::Model, AppError> {
        let (event, member) = event_and_member(self.db, event_id, user_id).await?;

        let attended = CrudService::<participation::Entity>::new(self.db)
            .find_one_where(
                Condition::all()
                    .add(participation::Column::EventId.eq(event.id))
                    .add(participation::Column::MemberId.eq(member.id))
                    .add(participation::Column::Attended.eq(true)),
            )
            .await?
            .is_some();

        if !attended {
            return Err(AppError::BadRequest(format!(
                "User #{} didn't attend the event #{}!",
                user_id, event_id
            )));
        }

        if self.find(event.id, member.id).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "User #{} has already made a review of the event #{}!",
                user_id, event_id
            )));
        }

        self.reviews
            .create(params.into_active_model(member.id, event.id))
            .await
    }

    pub async fn get(&self, event_id: i32, user_id: i32) -> Result<review::Model, AppError> {
        let (event, member) = event_and_member(self.db, event_id, user_id).await?;

        self.find(event.id, member.id).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "User #{} has not made any reviews of the event #{}!",
                user_id, event_id
            ))
        })
    }

    pub async fn update(
        &self,
        event_id: i32,
        user_id: i32,
        params: UpdateReviewParams,
    ) -> Result<review::Model, AppError> {
        let review = self.get(event_id, user_id).await?;

        self.reviews.update(review.id, params).await
    }

    pub async fn delete(&self, event_id: i32, user_id: i32, hard: bool) -> Result<(), AppError> {
        let review = self.get(event_id, user_id).await?;

        self.reviews.delete(review.id, hard).await
    }

    pub async fn by_event(
        &self,
        event_id: i32,
        score: Option<i32>,
    ) -> Result<Vec<review::Model>, AppError> {
        CrudService::<event::Entity>::new(self.db)
            .require(event_id)
            .await?;

        self.reviews
            .find_where(
                Condition::all()
                    .add(review::Column::EventId.eq(event_id))
                    .add_option(score.map(|s| review::Column::Score.eq(s))),
            )
            .await
    }

    pub async fn by_user(
        &self,
        user_id: i32,
        score: Option<i32>,
    ) -> Result<Vec<review::Model>, AppError> {
        let member = MemberService::new(self.db).profile_of(user_id).await?;

        self.reviews
            .find_where(
                Condition::all()
                    .add(review::Column::AuthorId.eq(member.id))
                    .add_option(score.map(|s| review::Column::Score.eq(s))),
            )
            .await
    }

    async fn find(&self, event_id: i32, author_id: i32) -> Result<Option<review::Model>, AppError> {
        self.reviews
            .find_one_where(
                Condition::all()
                    .add(review::Column::EventId.eq(event_id))
                    .add(review::Column::AuthorId.eq(author_id)),
            )
            .await
    }
}
