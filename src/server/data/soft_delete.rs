//! Generic create/read/list/update/delete over every soft-deletable entity.
//!
//! Entity-specific repositories wrap [`SoftDeleteRepository`] and only add the lookups
//! that are unique to their family (relationship sub-resources, pivot lookups...).

use chrono::{DateTime, Utc};
use entity::soft_delete::SoftDelete;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Select, sea_query::IntoCondition,
};
use std::marker::PhantomData;

use crate::server::model::pagination::PageRequest;

/// Explicit partial update of one entity.
///
/// Implemented by each `Update*Params` struct: only the fields that are `Some` are
/// written to the active model.
pub trait Changes<E: EntityTrait> {
    fn apply(self, model: &mut E::ActiveModel);
}

/// Inserts `model` with fresh bookkeeping columns.
///
/// `created_at` and `updated_at` receive the same timestamp, `deleted` is cleared.
/// Usable with a plain connection or inside a transaction.
pub async fn insert<E, C>(db: &C, mut model: E::ActiveModel) -> Result<E::Model, DbErr>
where
    E: SoftDelete,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    let now = Utc::now();

    model.set(E::created_at_column(), now.into());
    model.set(E::updated_at_column(), now.into());
    model.set(E::deleted_column(), false.into());
    model.set(E::deleted_at_column(), Option::<DateTime<Utc>>::None.into());

    model.insert(db).await
}

/// Writes `changes` over an already loaded row and refreshes `updated_at`.
///
/// Usable with a plain connection or inside a transaction.
pub async fn update<E, C, P>(db: &C, model: E::Model, changes: P) -> Result<E::Model, DbErr>
where
    E: SoftDelete,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
    C: ConnectionTrait,
    P: Changes<E>,
{
    let mut active = model.into_active_model();
    changes.apply(&mut active);
    active.set(E::updated_at_column(), Utc::now().into());

    active.update(db).await
}

pub struct SoftDeleteRepository<'a, E> {
    db: &'a DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<'a, E> SoftDeleteRepository<'a, E>
where
    E: SoftDelete,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Base select of every row that has not been soft deleted.
    pub fn select_active(&self) -> Select<E> {
        E::find().filter(E::deleted_column().eq(false))
    }

    pub async fn create(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        insert::<E, _>(self.db, model).await
    }

    /// Gets an active row by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Row exists and is not soft deleted
    /// - `Ok(None)` - No row, or the row was soft deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        self.select_active()
            .filter(E::id_column().eq(id))
            .one(self.db)
            .await
    }

    /// Gets a row by id whether it was soft deleted or not.
    pub async fn find_any(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find().filter(E::id_column().eq(id)).one(self.db).await
    }

    /// Whether `id` resolves to an active row.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self
            .select_active()
            .filter(E::id_column().eq(id))
            .count(self.db)
            .await?
            > 0)
    }

    /// Active rows matching `condition`, ordered by id.
    ///
    /// Backs the relationship sub-resources, e.g. the members of a team or the replies
    /// to a comment.
    pub async fn find_where<C: IntoCondition>(&self, condition: C) -> Result<Vec<E::Model>, DbErr> {
        self.select_active()
            .filter(condition)
            .order_by_asc(E::id_column())
            .all(self.db)
            .await
    }

    /// First active row matching `condition`.
    pub async fn find_one_where<C: IntoCondition>(
        &self,
        condition: C,
    ) -> Result<Option<E::Model>, DbErr> {
        self.select_active()
            .filter(condition)
            .order_by_asc(E::id_column())
            .one(self.db)
            .await
    }

    /// Number of active rows matching `condition`.
    pub async fn count_where<C: IntoCondition>(&self, condition: C) -> Result<u64, DbErr> {
        self.select_active().filter(condition).count(self.db).await
    }

    /// Counts and fetches one page of an already filtered select.
    ///
    /// The count runs on the same statement as the page query, before limit and offset
    /// are applied. A limit of `0` fetches every row after `skip`. Values beyond the
    /// database's signed range are capped.
    ///
    /// # Arguments
    /// - `select` - Statement built from [`Self::select_active`], filtered and sorted
    /// - `page` - Requested skip and limit
    ///
    /// # Returns
    /// - `Ok((Vec<Model>, u64))` - Rows of the page and total matching rows
    /// - `Err(DbErr)` - Database error during count or fetch
    pub async fn list(
        &self,
        select: Select<E>,
        page: &PageRequest,
    ) -> Result<(Vec<E::Model>, u64), DbErr> {
        let total = select.clone().count(self.db).await?;

        let page = page.clamped();
        let select = match (page.skip, page.limit) {
            (0, 0) => select,
            (skip, 0) => select.offset(skip).limit(PageRequest::MAX),
            (skip, limit) => select.offset(skip).limit(limit),
        };

        let rows = select.all(self.db).await?;

        Ok((rows, total))
    }

    /// Applies a partial update to an active row and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated row
    /// - `Ok(None)` - Id does not resolve to an active row, nothing was written
    /// - `Err(DbErr)` - Database error during update
    pub async fn update<P: Changes<E>>(&self, id: i32, changes: P) -> Result<Option<E::Model>, DbErr> {
        let Some(model) = self.find_active(id).await? else {
            return Ok(None);
        };

        Ok(Some(update::<E, _, P>(self.db, model, changes).await?))
    }

    /// Marks an active row as deleted.
    ///
    /// Rows that are already soft deleted are left untouched so `deleted_at` keeps the
    /// time of the first deletion.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows that were marked, `0` or `1`
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32) -> Result<u64, DbErr> {
        let mut changes = <E::ActiveModel as ActiveModelTrait>::default();
        changes.set(E::deleted_column(), true.into());
        changes.set(E::deleted_at_column(), Some(Utc::now()).into());

        let result = E::update_many()
            .set(changes)
            .filter(E::id_column().eq(id))
            .filter(E::deleted_column().eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Physically removes a row, active or soft deleted.
    ///
    /// Dependents declared with `ON DELETE CASCADE` are removed by the database.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed, `0` or `1`
    /// - `Err(DbErr)` - Database error, including foreign key violations from
    ///   dependents without cascade
    pub async fn hard_delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
