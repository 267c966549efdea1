use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CatalogItemDto, CatalogKind},
    },
    server::{
        controller::row_id, error::AppError, service::catalog::CatalogService, state::AppState,
    },
};

/// Tag for grouping character, planet and vehicle endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

#[utoipa::path(
    get,
    path = "/characters",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CatalogItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    list_items(&state, CatalogKind::Character).await
}

#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "The character", body = CatalogItemDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    get_item(&state, CatalogKind::Character, path).await
}

#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<CatalogItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    list_items(&state, CatalogKind::Planet).await
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "The planet", body = CatalogItemDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    get_item(&state, CatalogKind::Planet, path).await
}

#[utoipa::path(
    get,
    path = "/vehicles",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All vehicles", body = Vec<CatalogItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    list_items(&state, CatalogKind::Vehicle).await
}

#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "The vehicle", body = CatalogItemDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    get_item(&state, CatalogKind::Vehicle, path).await
}

/// Lists every item of a kind as `{id, name, description}` objects.
async fn list_items(
    state: &AppState,
    kind: CatalogKind,
) -> Result<(StatusCode, Json<Vec<CatalogItemDto>>), AppError> {
    let items = CatalogService::new(&state.db).get_all(kind).await?;

    let items_dto = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(items_dto)))
}

/// Fetches one item, answering 404 `{"error": "<kind> not found"}` when absent.
async fn get_item(
    state: &AppState,
    kind: CatalogKind,
    path: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<CatalogItemDto>), AppError> {
    let Path(id) = path?;
    let id = row_id(id, kind)?;

    let item = CatalogService::new(&state.db)
        .get_by_id(kind, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", kind)))?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}
