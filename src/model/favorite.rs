use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::CatalogItemDto;

/// Serialized favorite list with every related entity expanded.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct FavoriteListDto {
    pub id: i32,
    pub planets: Vec<CatalogItemDto>,
    pub characters: Vec<CatalogItemDto>,
    pub vehicles: Vec<CatalogItemDto>,
}

/// Request body of the favorite add/remove routes.
///
/// `user_id` is optional at the type level so a missing field is reported as a
/// 400 with the standard error body instead of a deserialization rejection.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct FavoriteRequestDto {
    pub user_id: Option<i32>,
}

/// Response of the favorite add/remove routes.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct FavoriteResponseDto {
    /// `"Added"` or `"Removed"`.
    pub message: String,
    /// The user's favorite list after the change; `null` if the user has none.
    pub favorites: Option<FavoriteListDto>,
}
