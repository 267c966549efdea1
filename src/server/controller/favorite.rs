use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::CatalogKind,
        favorite::{FavoriteRequestDto, FavoriteResponseDto},
    },
    server::{
        controller::row_id, error::AppError, model::favorite::FavoriteParam,
        service::favorite::FavoriteService, state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Add a character, planet or vehicle to a user's favorites.
///
/// Creates the user's favorite list on first use. Adding an existing favorite again
/// succeeds without creating a duplicate.
///
/// # Returns
/// - `200 OK` - `{"message": "Added", "favorites": ...}`
/// - `400 Bad Request` - Missing/malformed body, missing `user_id`, or malformed path
/// - `404 Not Found` - User or item does not exist
#[utoipa::path(
    post,
    path = "/favorite/{kind}/{item_id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = CatalogKind, Path, description = "character, planet or vehicle"),
        ("item_id" = i32, Path, description = "ID of the item to favorite")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite added", body = FavoriteResponseDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    path: Result<Path<(CatalogKind, i64)>, PathRejection>,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = favorite_param(path, payload)?;

    let favorites = FavoriteService::new(&state.db).add(param).await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteResponseDto {
            message: "Added".to_string(),
            favorites: Some(favorites.into_dto()),
        }),
    ))
}

/// Remove a character, planet or vehicle from a user's favorites.
///
/// Removing something that is not a favorite succeeds and leaves the list unchanged.
///
/// # Returns
/// - `200 OK` - `{"message": "Removed", "favorites": ...}`
/// - `400 Bad Request` - Missing/malformed body, missing `user_id`, or malformed path
/// - `404 Not Found` - User or item does not exist
#[utoipa::path(
    delete,
    path = "/favorite/{kind}/{item_id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = CatalogKind, Path, description = "character, planet or vehicle"),
        ("item_id" = i32, Path, description = "ID of the item to remove")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite removed", body = FavoriteResponseDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    path: Result<Path<(CatalogKind, i64)>, PathRejection>,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = favorite_param(path, payload)?;

    let favorites = FavoriteService::new(&state.db).remove(param).await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteResponseDto {
            message: "Removed".to_string(),
            favorites: favorites.map(|f| f.into_dto()),
        }),
    ))
}

/// Validates the extracted path and body into service parameters.
fn favorite_param(
    path: Result<Path<(CatalogKind, i64)>, PathRejection>,
    payload: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<FavoriteParam, AppError> {
    let Path((kind, item_id)) = path?;
    let Json(payload) = payload?;

    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id is required".to_string()))?;

    Ok(FavoriteParam {
        user_id,
        kind,
        item_id: row_id(item_id, kind)?,
    })
}
