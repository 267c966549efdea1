use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::favorite::FavoriteListDto;

/// Serialized user. The stored password is never part of this shape.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub favorites: Option<FavoriteListDto>,
}
