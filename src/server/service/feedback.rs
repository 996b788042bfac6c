use entity::{feedback, feedback_answer};
use sea_orm::{ColumnTrait, DatabaseConnection};

use crate::{
    model::user::UserDto,
    server::{
        error::AppError,
        model::{
            feedback::{
                CreateFeedbackAnswerParams, CreateFeedbackParams, UpdateFeedbackAnswerParams,
                UpdateFeedbackParams,
            },
            pagination::{ListQuery, Paginated},
        },
        service::{crud::CrudService, member::MemberService},
    },
};

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
    feedbacks: CrudService<'a, feedback::Entity>,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            feedbacks: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<feedback::Model>, AppError> {
        self.feedbacks.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<feedback::Model, AppError> {
        self.feedbacks.get(id).await
    }

    pub async fn create(&self, params: CreateFeedbackParams) -> Result<feedback::Model, AppError> {
        let author = MemberService::new(self.db)
            .profile_of(params.author_user_id)
            .await?;

        self.feedbacks
            .create(params.into_active_model(author.id))
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateFeedbackParams,
    ) -> Result<feedback::Model, AppError> {
        self.feedbacks.update(id, params).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.feedbacks.delete(id, hard).await
    }

    pub async fn author(&self, id: i32) -> Result<UserDto, AppError> {
        let feedback = self.feedbacks.get(id).await?;

        MemberService::new(self.db)
            .user_of_profile(feedback.author_id)
            .await
    }

    pub async fn answer(&self, id: i32) -> Result<feedback_answer::Model, AppError> {
        self.feedbacks.require(id).await?;

        CrudService::<feedback_answer::Entity>::new(self.db)
            .find_one_where(feedback_answer::Column::FeedbackId.eq(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Feedback #{} has no answer!", id)))
    }
}

pub struct FeedbackAnswerService<'a> {
    db: &'a DatabaseConnection,
    answers: CrudService<'a, feedback_answer::Entity>,
}

impl<'a> FeedbackAnswerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            answers: CrudService::new(db),
        }
    }

    pub async fn list(
        &self,
        query: &ListQuery,
    ) -> Result<Paginated<feedback_answer::Model>, AppError> {
        self.answers.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<feedback_answer::Model, AppError> {
        self.answers.get(id).await
    }

    /// Answers a feedback and marks it resolved.
    ///
    /// # Returns
    /// - `Ok(feedback_answer::Model)` - The new answer
    /// - `Err(AppError::NotFound)` - Unknown feedback or author
    /// - `Err(AppError::Conflict)` - The feedback already has an answer
    pub async fn create(
        &self,
        params: CreateFeedbackAnswerParams,
    ) -> Result<feedback_answer::Model, AppError> {
        let feedbacks = CrudService::<feedback::Entity>::new(self.db);
        feedbacks.require(params.feedback_id).await?;
        let author = MemberService::new(self.db)
            .profile_of(params.author_user_id)
            .await?;

        let feedback_id = params.feedback_id;
        let unique = format!("for feedback #{}", feedback_id);
        let answer = self
            .answers
            .create_unique(params.into_active_model(author.id), &unique)
            .await?;

        feedbacks
            .update(feedback_id, UpdateFeedbackParams::resolved())
            .await?;

        tracing::info!("Feedback #{} answered and resolved", feedback_id);

        Ok(answer)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateFeedbackAnswerParams,
    ) -> Result<feedback_answer::Model, AppError> {
        self.answers.update(id, params).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.answers.delete(id, hard).await
    }

    pub async fn author(&self, id: i32) -> Result<UserDto, AppError> {
        let answer = self.answers.get(id).await?;

        MemberService::new(self.db)
            .user_of_profile(answer.author_id)
            .await
    }

    pub async fn feedback(&self, id: i32) -> Result<feedback::Model, AppError> {
        let answer = self.answers.get(id).await?;

        CrudService::<feedback::Entity>::new(self.db)
            .get(answer.feedback_id)
            .await
    }
}
