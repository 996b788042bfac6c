use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the `with_*_tables()` groups, then call
/// `build()` to get a [`TestContext`] backed by a fresh in-memory SQLite database.
///
/// The groups are not meant to be combined with each other since they share the member
/// tables; use `with_all_tables()` when a test spans several families.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_agreement_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, foreign keys included. Tables must be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables every club member needs: Role, User, Location, Team and Profile.
    pub fn with_member_tables(self) -> Self {
        self.with_table(Role)
            .with_table(User)
            .with_table(Location)
            .with_table(Team)
            .with_table(Profile)
    }

    /// Adds member tables plus Company, Agreement and the agreement/team pivot.
    pub fn with_agreement_tables(self) -> Self {
        self.with_member_tables()
            .with_table(Company)
            .with_table(Agreement)
            .with_table(AgreementTeam)
    }

    /// Adds member tables plus Path, Event, Participation and Review.
    pub fn with_event_tables(self) -> Self {
        self.with_member_tables()
            .with_table(Path)
            .with_table(Event)
            .with_table(Participation)
            .with_table(Review)
    }

    /// Adds member tables plus Tag, Post, PostTag, Comment and CommentReaction.
    pub fn with_post_tables(self) -> Self {
        self.with_member_tables()
            .with_table(Tag)
            .with_table(Post)
            .with_table(PostTag)
            .with_table(Comment)
            .with_table(CommentReaction)
    }

    /// Adds member tables plus Feedback and FeedbackAnswer.
    pub fn with_feedback_tables(self) -> Self {
        self.with_member_tables()
            .with_table(Feedback)
            .with_table(FeedbackAnswer)
    }

    /// Adds member tables plus Brand and Motorcycle.
    pub fn with_motorcycle_tables(self) -> Self {
        self.with_member_tables()
            .with_table(Brand)
            .with_table(Motorcycle)
    }

    /// Adds every table of the schema in dependency order.
    pub fn with_all_tables(self) -> Self {
        self.with_member_tables()
            .with_table(Brand)
            .with_table(Motorcycle)
            .with_table(Company)
            .with_table(Agreement)
            .with_table(AgreementTeam)
            .with_table(Path)
            .with_table(Event)
            .with_table(Participation)
            .with_table(Review)
            .with_table(Tag)
            .with_table(Post)
            .with_table(PostTag)
            .with_table(Comment)
            .with_table(CommentReaction)
            .with_table(Feedback)
            .with_table(FeedbackAnswer)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builds_every_table() {
        let test = TestBuilder::new().with_all_tables().build().await;

        assert!(test.is_ok());
        assert!(test.unwrap().db.is_some());
    }
}
