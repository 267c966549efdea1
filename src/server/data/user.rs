//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading and deleting user records.
//! Users are returned with their favorites already assembled, and the stored password
//! is dropped during conversion to the domain model.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{data::favorite::FavoriteListRepository, model::user::User};

/// Repository providing database operations for users.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all users with their favorites.
    ///
    /// Favorites for every user are loaded in a fixed number of batched queries rather
    /// than one query per user.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by id (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = entities.iter().map(|u| u.id).collect();
        let mut favorites = FavoriteListRepository::new(self.db)
            .get_by_user_ids(&user_ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let list = favorites.remove(&entity.id);
                User::from_entity(entity, list)
            })
            .collect())
    }

    /// Finds a user by id with their favorites.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let favorites = FavoriteListRepository::new(self.db)
            .find_by_user_id(id)
            .await?;

        Ok(Some(User::from_entity(entity, favorites)))
    }

    /// Checks whether a user exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a user along with their favorite list and its join rows.
    ///
    /// Dependents are removed explicitly so the cascade holds even on connections where
    /// foreign key enforcement is disabled. Run inside a transaction to make it atomic.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        if !self.exists(id).await? {
            return Ok(false);
        }

        FavoriteListRepository::new(self.db)
            .delete_by_user_id(id)
            .await?;

        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
