use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{catalog, favorite, sitemap, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Holonet API",
        description = "Characters, planets, vehicles and per-user favorites"
    ),
    tags(
        (name = "sitemap", description = "Route listing"),
        (name = "user", description = "Users and their favorites"),
        (name = "catalog", description = "Characters, planets and vehicles"),
        (name = "favorite", description = "Favorite list mutations")
    )
)]
struct ApiDoc;

/// Builds the documented API routes together with their OpenAPI document.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(sitemap::get_sitemap))
        .routes(routes!(user::list_users))
        .routes(routes!(user::get_user, user::delete_user))
        .routes(routes!(catalog::list_characters))
        .routes(routes!(catalog::get_character))
        .routes(routes!(catalog::list_planets))
        .routes(routes!(catalog::get_planet))
        .routes(routes!(catalog::list_vehicles))
        .routes(routes!(catalog::get_vehicle))
        .routes(routes!(favorite::add_favorite, favorite::remove_favorite))
        .split_for_parts()
}

/// Full application router with state attached, ready to serve.
pub fn app(db: DatabaseConnection) -> Router {
    let (router, api_doc) = router();

    router
        .route("/openapi.json", get(sitemap::get_openapi))
        .with_state(AppState::new(db, Arc::new(api_doc)))
}
