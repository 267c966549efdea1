//! User domain model.

use crate::model::user::UserDto;

use super::favorite::FavoriteList;

/// User with their favorites.
///
/// Deliberately has no password field: the stored password is dropped when the
/// entity is converted, so it cannot reach any serialized output.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub favorites: Option<FavoriteList>,
}

impl User {
    /// Converts an entity model plus its already-loaded favorites.
    pub fn from_entity(entity: entity::user::Model, favorites: Option<FavoriteList>) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            favorites,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            favorites: self.favorites.map(FavoriteList::into_dto),
        }
    }
}
