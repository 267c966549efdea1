use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa::openapi::OpenApi;

use crate::{
    model::api::{RouteDto, SitemapDto},
    server::state::AppState,
};

/// Tag for grouping the route listing in OpenAPI documentation
pub static SITEMAP_TAG: &str = "sitemap";

/// Lists every documented route.
///
/// The listing is generated from the OpenAPI document, so it always matches the
/// routes actually registered on the router.
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Every documented route", body = SitemapDto)
    ),
)]
pub async fn get_sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(build_sitemap(&state.api_doc)))
}

/// Serves the raw OpenAPI document.
pub async fn get_openapi(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.api_doc.as_ref().clone())
}

/// Flattens the OpenAPI paths into `(method, path)` pairs ordered by path.
pub fn build_sitemap(api_doc: &OpenApi) -> SitemapDto {
    let mut routes = Vec::new();

    for (path, item) in api_doc.paths.paths.iter() {
        let methods = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("PATCH", item.patch.is_some()),
            ("DELETE", item.delete.is_some()),
        ];

        for (method, present) in methods {
            if present {
                routes.push(RouteDto {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }

    routes.sort_by(|a, b| a.path.cmp(&b.path));

    SitemapDto { routes }
}
