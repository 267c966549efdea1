//! User service for business logic.
//!
//! This module provides the `UserService` for listing, fetching and deleting users.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users with their favorites.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by id (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with favorites
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(id).await?;
        Ok(user)
    }

    /// Deletes a user and everything they own in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - User, favorite list and join rows deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error; nothing is deleted
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let deleted = UserRepository::new(&txn).delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        txn.commit().await?;

        tracing::info!("Deleted user {} and their favorites", id);

        Ok(())
    }
}
