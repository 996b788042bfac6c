//! Tags, posts, comments and comment reactions.

use entity::{comment, comment_reaction, post, post_tag, tag};
use sea_orm::{ActiveValue, ColumnTrait, Condition, DatabaseConnection, TransactionTrait};

use crate::{
    model::user::UserDto,
    server::{
        data::soft_delete,
        error::AppError,
        model::{
            comment::{
                CreateCommentParams, CreateReactionParams, UpdateCommentParams,
                UpdateReactionParams,
            },
            pagination::{ListQuery, Paginated},
            post::{CreatePostParams, CreateTagParams, UpdatePostParams, UpdateTagParams},
        },
        service::{crud::CrudService, member::MemberService},
    },
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
    tags: CrudService<'a, tag::Entity>,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            tags: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<tag::Model>, AppError> {
        self.tags.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<tag::Model, AppError> {
        self.tags.get(id).await
    }

    pub async fn create(&self, params: CreateTagParams) -> Result<tag::Model, AppError> {
        let name = params.name.clone();
        self.tags
            .create_unique(params.into_active_model(), &name)
            .await
    }

    pub async fn update(&self, id: i32, params: UpdateTagParams) -> Result<tag::Model, AppError> {
        let name = params.name.clone();
        self.tags.update_unique(id, params, name.as_deref()).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.tags.delete(id, hard).await
    }

    pub async fn posts(&self, id: i32) -> Result<Vec<post::Model>, AppError> {
        self.tags.require(id).await?;

        let post_ids: Vec<i32> = CrudService::<post_tag::Entity>::new(self.db)
            .find_where(post_tag::Column::TagId.eq(id))
            .await?
            .into_iter()
            .map(|link| link.post_id)
            .collect();

        CrudService::<post::Entity>::new(self.db)
            .find_where(post::Column::Id.is_in(post_ids))
            .await
    }
}

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
    posts: CrudService<'a, post::Entity>,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            posts: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<post::Model>, AppError> {
        self.posts.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<post::Model, AppError> {
        self.posts.get(id).await
    }

    /// Creates a post and links its tags in one transaction.
    ///
    /// # Returns
    /// - `Ok(post::Model)` - The new post
    /// - `Err(AppError::NotFound)` - Unknown author, or tag ids that do not resolve,
    ///   all of them listed in the message
    /// - `Err(AppError::Conflict)` - A post with the same title already exists
    pub async fn create(&self, params: CreatePostParams) -> Result<post::Model, AppError> {
        let author = MemberService::new(self.db)
            .profile_of(params.author_user_id)
            .await?;

        let found: Vec<i32> = CrudService::<tag::Entity>::new(self.db)
            .find_where(tag::Column::Id.is_in(params.tag_ids.clone()))
            .await?
            .into_iter()
            .map(|tag| tag.id)
            .collect();
        let missing: Vec<String> = params
            .tag_ids
            .iter()
            .filter(|id| !found.contains(id))
            .map(|id| format!("#{}", id))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::NotFound(format!(
                "Tags {} not found!",
                missing.join(", ")
            )));
        }

        let title = params.title.clone();
        let tag_ids = params.tag_ids.clone();

        let txn = self.db.begin().await?;

        let post = soft_delete::insert::<post::Entity, _>(&txn, params.into_active_model(author.id))
            .await
            .map_err(|err| AppError::conflict_on_duplicate(err, "Post", &title))?;

        for tag_id in tag_ids {
            soft_delete::insert::<post_tag::Entity, _>(
                &txn,
                post_tag::ActiveModel {
                    post_id: ActiveValue::Set(post.id),
                    tag_id: ActiveValue::Set(tag_id),
                    ..Default::default()
                },
            )
            .await?;
        }

        txn.commit().await?;

        tracing::info!("Created post {} (#{})", post.slug, post.id);

        Ok(post)
    }

    pub async fn update(&self, id: i32, params: UpdatePostParams) -> Result<post::Model, AppError> {
        let title = params.title.clone();
        self.posts.update_unique(id, params, title.as_deref()).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.posts.delete(id, hard).await
    }

    pub async fn author(&self, id: i32) -> Result<UserDto, AppError> {
        let post = self.posts.get(id).await?;

        MemberService::new(self.db)
            .user_of_profile(post.author_id)
            .await
    }

    pub async fn tags(&self, id: i32) -> Result<Vec<tag::Model>, AppError> {
        self.posts.require(id).await?;

        let tag_ids: Vec<i32> = CrudService::<post_tag::Entity>::new(self.db)
            .find_where(post_tag::Column::PostId.eq(id))
            .await?
            .into_iter()
            .map(|link| link.tag_id)
            .collect();

        CrudService::<tag::Entity>::new(self.db)
            .find_where(tag::Column::Id.is_in(tag_ids))
            .await
    }

    pub async fn comments(&self, id: i32) -> Result<Vec<comment::Model>, AppError> {
        self.posts.require(id).await?;

        CrudService::<comment::Entity>::new(self.db)
            .find_where(comment::Column::PostId.eq(id))
            .await
    }
}

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    comments: CrudService<'a, comment::Entity>,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            comments: CrudService::new(db),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<comment::Model>, AppError> {
        self.comments.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<comment::Model, AppError> {
        self.comments.get(id).await
    }

    /// Adds a comment to a post, optionally as a reply.
    ///
    /// # Returns
    /// - `Ok(comment::Model)` - The new comment
    /// - `Err(AppError::NotFound)` - Unknown post, parent comment or author
    /// - `Err(AppError::BadRequest)` - The parent comment belongs to another post
    pub async fn create(&self, params: CreateCommentParams) -> Result<comment::Model, AppError> {
        CrudService::<post::Entity>::new(self.db)
            .require(params.post_id)
            .await?;

        if let Some(parent_id) = params.parent_id {
            let parent = self.comments.get(parent_id).await?;
            if parent.post_id != params.post_id {
                return Err(AppError::BadRequest(format!(
                    "Comment #{} does not belong to post #{}!",
                    parent_id, params.post_id
                )));
            }
        }

        let author = MemberService::new(self.db)
            .profile_of(params.author_user_id)
            .await?;

        self.comments
            .create(params.into_active_model(author.id))
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCommentParams,
    ) -> Result<comment::Model, AppError> {
        self.comments.update(id, params).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.comments.delete(id, hard).await
    }

    pub async fn author(&self, id: i32) -> Result<UserDto, AppError> {
        let comment = self.comments.get(id).await?;

        MemberService::new(self.db)
            .user_of_profile(comment.author_id)
            .await
    }

    pub async fn post(&self, id: i32) -> Result<post::Model, AppError> {
        let comment = self.comments.get(id).await?;

        CrudService::<post::Entity>::new(self.db)
            .get(comment.post_id)
            .await
    }

    pub async fn parent(&self, id: i32) -> Result<comment::Model, AppError> {
        let comment = self.comments.get(id).await?;

        let Some(parent_id) = comment.parent_id else {
            return Err(AppError::NotFound(format!(
                "Comment #{} is not a reply!",
                id
            )));
        };

        self.comments.get(parent_id).await
    }

    pub async fn replies(&self, id: i32) -> Result<Vec<comment::Model>, AppError> {
        self.comments.require(id).await?;

        self.comments
            .find_where(comment::Column::ParentId.eq(id))
            .await
    }

    pub async fn reactions(&self, id: i32) -> Result<Vec<comment_reaction::Model>, AppError> {
        self.comments.require(id).await?;

        CrudService::<comment_reaction::Entity>::new(self.db)
            .find_where(comment_reaction::Column::CommentId.eq(id))
            .await
    }
}

pub struct ReactionService<'a> {
    db: &'a DatabaseConnection,
    reactions: CrudService<'a, comment_reaction::Entity>,
}

impl<'a> ReactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            reactions: CrudService::new(db),
        }
    }

    pub async fn list(
        &self,
        query: &ListQuery,
    ) -> Result<Paginated<comment_reaction::Model>, AppError> {
        self.reactions.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<comment_reaction::Model, AppError> {
        self.reactions.get(id).await
    }

    /// Records a member's reaction to a comment, at most one per member and comment.
    pub async fn create(
        &self,
        params: CreateReactionParams,
    ) -> Result<comment_reaction::Model, AppError> {
        CrudService::<comment::Entity>::new(self.db)
            .require(params.comment_id)
            .await?;
        let author = MemberService::new(self.db)
            .profile_of(params.author_user_id)
            .await?;

        let existing = self
            .reactions
            .find_one_where(
                Condition::all()
                    .add(comment_reaction::Column::CommentId.eq(params.comment_id))
                    .add(comment_reaction::Column::AuthorId.eq(author.id)),
            )
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "User #{} already reacted to comment #{}!",
                params.author_user_id, params.comment_id
            )));
        }

        self.reactions
            .create(params.into_active_model(author.id))
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateReactionParams,
    ) -> Result<comment_reaction::Model, AppError> {
        self.reactions.update(id, params).await
    }

    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        self.reactions.delete(id, hard).await
    }
}
