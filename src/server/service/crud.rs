//! Generic list/get/create/update/delete shared by every entity family.
//!
//! Family services compose a [`CrudService`] per entity and add their own existence
//! checks before writes and the relationship lookups of their sub-resources.

use std::marker::PhantomData;

use entity::soft_delete::SoftDelete;
use sea_orm::{
    sea_query::IntoCondition, ActiveModelBehavior, DatabaseConnection, IntoActiveModel,
    QueryOrder, Select,
};

use crate::server::{
    data::{
        query::{apply_filters, apply_sort},
        soft_delete::{Changes, SoftDeleteRepository},
    },
    error::AppError,
    model::pagination::{ListQuery, Paginated, Pagination},
};

pub struct CrudService<'a, E> {
    db: &'a DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<'a, E> CrudService<'a, E>
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

    pub fn repo(&self) -> SoftDeleteRepository<'a, E> {
        SoftDeleteRepository::new(self.db)
    }

    /// Lists active rows with the caller's filter, sort and window.
    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<E::Model>, AppError> {
        self.list_from(self.repo().select_active(), query).await
    }

    /// Lists rows of an already narrowed select.
    ///
    /// Filter clauses are applied first, then the requested sort. Rows always end up
    /// ordered by id after the requested keys so pages are stable.
    ///
    /// # Returns
    /// - `Ok(Paginated<Model>)` - One page plus pagination metadata
    /// - `Err(AppError::QueryErr)` - Unknown field or value that does not fit the column
    /// - `Err(AppError::DbErr)` - Database error during count or fetch
    pub async fn list_from(
        &self,
        select: Select<E>,
        query: &ListQuery,
    ) -> Result<Paginated<E::Model>, AppError> {
        let select = apply_filters(select, &query.filter)?;
        let select = apply_sort(select, &query.sort)?.order_by_asc(E::id_column());

        let (data, total) = self.repo().list(select, &query.page).await?;

        Ok(Paginated {
            data,
            pagination: Pagination::new(total, &query.page),
        })
    }

    /// Gets an active row or fails with `<Label> #<id> not found!`.
    pub async fn get(&self, id: i32) -> Result<E::Model, AppError> {
        self.repo()
            .find_active(id)
            .await?
            .ok_or_else(|| AppError::not_found(E::LABEL, id))
    }

    /// Fails with a not-found error unless `id` is an active row.
    pub async fn require(&self, id: i32) -> Result<(), AppError> {
        if !self.repo().exists(id).await? {
            return Err(AppError::not_found(E::LABEL, id));
        }

        Ok(())
    }

    /// Same as [`Self::require`] for an optional reference.
    pub async fn require_opt(&self, id: Option<i32>) -> Result<(), AppError> {
        match id {
            Some(id) => self.require(id).await,
            None => Ok(()),
        }
    }

    pub async fn find_where<C: IntoCondition>(&self, condition: C) -> Result<Vec<E::Model>, AppError> {
        Ok(self.repo().find_where(condition).await?)
    }

    pub async fn find_one_where<C: IntoCondition>(
        &self,
        condition: C,
    ) -> Result<Option<E::Model>, AppError> {
        Ok(self.repo().find_one_where(condition).await?)
    }

    pub async fn create(&self, model: E::ActiveModel) -> Result<E::Model, AppError> {
        Ok(self.repo().create(model).await?)
    }

    /// Creates a row whose `unique` value names it in a duplicate error.
    pub async fn create_unique(
        &self,
        model: E::ActiveModel,
        unique: &str,
    ) -> Result<E::Model, AppError> {
        self.repo()
            .create(model)
            .await
            .map_err(|err| AppError::conflict_on_duplicate(err, E::LABEL, unique))
    }

    pub async fn update<P: Changes<E>>(&self, id: i32, changes: P) -> Result<E::Model, AppError> {
        self.repo()
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(E::LABEL, id))
    }

    /// Updates a row, naming `unique` in a duplicate error when it is being changed.
    pub async fn update_unique<P: Changes<E>>(
        &self,
        id: i32,
        changes: P,
        unique: Option<&str>,
    ) -> Result<E::Model, AppError> {
        let result = self.repo().update(id, changes).await;

        match (result, unique) {
            (Ok(Some(model)), _) => Ok(model),
            (Ok(None), _) => Err(AppError::not_found(E::LABEL, id)),
            (Err(err), Some(value)) => Err(AppError::conflict_on_duplicate(err, E::LABEL, value)),
            (Err(err), None) => Err(err.into()),
        }
    }

    /// Soft or hard deletes a row.
    ///
    /// A soft delete only applies to active rows. A hard delete removes the row even when
    /// it was soft deleted before; the database cascades to dependents.
    ///
    /// # Returns
    /// - `Ok(())` - Row was deleted
    /// - `Err(AppError::NotFound)` - Nothing matched `id`
    /// - `Err(AppError::DbErr)` - Database error, a foreign key violation maps to 409
    pub async fn delete(&self, id: i32, hard: bool) -> Result<(), AppError> {
        let repo = self.repo();

        let affected = if hard {
            repo.hard_delete(id).await?
        } else {
            repo.soft_delete(id).await?
        };

        if affected == 0 {
            return Err(AppError::not_found(E::LABEL, id));
        }

        tracing::debug!("{} #{} deleted (hard: {})", E::LABEL, id, hard);

        Ok(())
    }
}
