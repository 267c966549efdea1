//! Favorite service for adding and removing favorites.
//!
//! Both operations validate that the user and the catalog item exist, then run their
//! writes and the follow-up read inside a single transaction.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{catalog::CatalogRepository, favorite::FavoriteListRepository, user::UserRepository},
    error::AppError,
    model::favorite::{FavoriteList, FavoriteParam},
};

pub struct FavoriteService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an item to the user's favorites, creating the list on first use.
    ///
    /// Adding an item that is already a favorite is a no-op.
    ///
    /// # Returns
    /// - `Ok(FavoriteList)` - The user's list after the change
    /// - `Err(AppError::NotFound)` - User or item does not exist
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn add(&self, param: FavoriteParam) -> Result<FavoriteList, AppError> {
        let txn = self.db.begin().await?;

        ensure_exists(&txn, &param).await?;

        let favorite_repo = FavoriteListRepository::new(&txn);
        let list = favorite_repo.get_or_create(param.user_id).await?;
        let added = favorite_repo
            .add_item(list.id, param.kind, param.item_id)
            .await?;

        let favorites = favorite_repo
            .find_by_user_id(param.user_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Favorite list {} missing right after upsert",
                    list.id
                ))
            })?;

        txn.commit().await?;

        if added {
            tracing::info!(
                "User {} added {} {} to favorites",
                param.user_id,
                param.kind,
                param.item_id
            );
        }

        Ok(favorites)
    }

    /// Removes an item from the user's favorites.
    ///
    /// Removing an item that is not a favorite, or from a user without a list, is a
    /// no-op.
    ///
    /// # Returns
    /// - `Ok(Option<FavoriteList>)` - The user's list after the change, `None` if they have none
    /// - `Err(AppError::NotFound)` - User or item does not exist
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn remove(&self, param: FavoriteParam) -> Result<Option<FavoriteList>, AppError> {
        let txn = self.db.begin().await?;

        ensure_exists(&txn, &param).await?;

        let favorite_repo = FavoriteListRepository::new(&txn);
        let mut removed = false;
        if let Some(list) = favorite_repo.find_model_by_user_id(param.user_id).await? {
            removed = favorite_repo
                .remove_item(list.id, param.kind, param.item_id)
                .await?;
        }

        let favorites = favorite_repo.find_by_user_id(param.user_id).await?;

        txn.commit().await?;

        if removed {
            tracing::info!(
                "User {} removed {} {} from favorites",
                param.user_id,
                param.kind,
                param.item_id
            );
        }

        Ok(favorites)
    }
}

/// Fails with `NotFound` unless both the user and the catalog item exist.
async fn ensure_exists(txn: &DatabaseTransaction, param: &FavoriteParam) -> Result<(), AppError> {
    if !UserRepository::new(txn).exists(param.user_id).await? {
        return Err(AppError::NotFound("user not found".to_string()));
    }

    if !CatalogRepository::new(txn)
        .exists(param.kind, param.item_id)
        .await?
    {
        return Err(AppError::NotFound(format!("{} not found", param.kind)));
    }

    Ok(())
}
